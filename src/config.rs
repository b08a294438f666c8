//! Run-time configuration
//!
//! Assembled from CLI flags and the `DEBUG` environment variable.

use thiserror::Error;

/// Environment variable that reveals the secret before play
pub const DEBUG_ENV: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DEBUG must be 0 or 1, got '{0}'")]
    InvalidDebugFlag(String),
}

/// Settings for one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Print the secret's codes before the first guess
    pub reveal_secret: bool,
    /// Fixed RNG seed for a reproducible secret
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Combine CLI flags with the `DEBUG` environment variable
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDebugFlag` if `DEBUG` holds anything
    /// other than empty, `0` or `1`.
    pub fn from_env(reveal_secret: bool, seed: Option<u64>) -> Result<Self, ConfigError> {
        let debug = std::env::var(DEBUG_ENV).ok();
        Ok(Self {
            reveal_secret: reveal_secret || parse_debug_flag(debug.as_deref())?,
            seed,
        })
    }
}

/// Interpret the value of the `DEBUG` variable
///
/// # Errors
/// Returns `ConfigError::InvalidDebugFlag` for anything but unset, empty,
/// `0` or `1`.
///
/// # Examples
/// ```
/// use emoji_mastermind::config::parse_debug_flag;
///
/// assert_eq!(parse_debug_flag(Some("1")), Ok(true));
/// assert_eq!(parse_debug_flag(None), Ok(false));
/// assert!(parse_debug_flag(Some("yes")).is_err());
/// ```
pub fn parse_debug_flag(value: Option<&str>) -> Result<bool, ConfigError> {
    match value.map(str::trim) {
        None | Some("" | "0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(ConfigError::InvalidDebugFlag(other.to_string())),
    }
}
