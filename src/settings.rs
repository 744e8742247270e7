//! # Settings
//!
//! Farm Monitor is configured with a single TOML file.
//!
//! ## Example
//!
//! ```toml
//! http_port = 8000
//! access_key = "1bc7bbdc"
//! write_error_policy = "strict"
//! ```

use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Read the settings file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Settings> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

/// Represents a root settings object.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Web server port. It's used for the user interface as well as for sensor posts.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Shared secret compared against the `access_key` field of incoming writes.
    pub access_key: String,

    /// What to do when a write fails after it has been accepted.
    #[serde(default)]
    pub write_error_policy: WriteErrorPolicy,
}

/// Behavior of an accepted write whose insert fails.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WriteErrorPolicy {
    /// The caller is told that the write failed.
    Strict,

    /// The failure is only logged and the caller is still told that the
    /// write succeeded. This matches what earlier deployments of the
    /// dashboard did.
    Lenient,
}

impl Default for WriteErrorPolicy {
    fn default() -> Self {
        WriteErrorPolicy::Strict
    }
}

const fn default_http_port() -> u16 {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_settings_use_defaults() -> Result {
        let settings: Settings = toml::from_str(r#"access_key = "1bc7bbdc""#)?;
        assert_eq!(settings.http_port, 8000);
        assert_eq!(settings.write_error_policy, WriteErrorPolicy::Strict);
        Ok(())
    }

    #[test]
    fn lenient_policy_is_readable() -> Result {
        let settings: Settings = toml::from_str(
            r#"
            http_port = 8080
            access_key = "secret"
            write_error_policy = "lenient"
            "#,
        )?;
        assert_eq!(settings.http_port, 8080);
        assert_eq!(settings.write_error_policy, WriteErrorPolicy::Lenient);
        Ok(())
    }

    #[test]
    fn missing_access_key_is_an_error() {
        assert!(toml::from_str::<Settings>("http_port = 8000").is_err());
    }
}
