//! Web interface templates.

pub mod base;
pub mod data;
pub mod index;
pub mod navbar;

/// Timestamp format used in the history table.
pub const DATE_FORMAT: &str = "%b %d, %H:%M:%S%.3f";
