use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed into its expected type.
    ///
    /// `MOCK_API_LATENCY` takes `true` or `false`; `MOCK_API_UPLOAD_LIMIT_BYTES`
    /// takes a non-negative integer.
    #[error("Invalid value for environment variable {key}: {value:?}")]
    InvalidEnvVar { key: String, value: String },
}
