/// Number of rows fetched per history page, before thinning.
pub const PAGE_SIZE: i64 = 200;

/// Consecutive readings closer than this many milliseconds are considered
/// one burst and collapsed by the thinner.
pub const MIN_GAP_MS: i64 = 10;
