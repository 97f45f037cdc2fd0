use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

/// Upload size accepted by `POST /api/upload` when nothing is configured.
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Whether handlers sleep before answering.
    pub latency: bool,
    /// Largest file `POST /api/upload` accepts before answering 413.
    pub upload_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: true,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Reads `MOCK_API_LATENCY` and `MOCK_API_UPLOAD_LIMIT_BYTES`.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(AppError::ConfigErr)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a caller-supplied variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        Ok(Self {
            latency: parse_var(&lookup, "MOCK_API_LATENCY")?.unwrap_or(defaults.latency),
            upload_limit_bytes: parse_var(&lookup, "MOCK_API_UPLOAD_LIMIT_BYTES")?
                .unwrap_or(defaults.upload_limit_bytes),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                value: raw,
            }),
    }
}
