use thiserror::Error;

/// Invalid configuration value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown brush calculation mode `{0}` (expected `relative` or `absolute`)")]
    UnknownCalculationMode(String),

    #[error("update rate must be a positive, finite number of hertz, got {0}")]
    InvalidUpdateRate(f64),

    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}
