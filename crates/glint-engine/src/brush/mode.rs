use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Coordinate space a brush renders in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum CalculationMode {
    /// Bounds are the group's own bounding box moved to the origin; targets are
    /// relative to it. The brush paints the same way wherever the group sits.
    #[default]
    Relative,
    /// Bounds are the whole surface; targets carry surface positions.
    Absolute,
}

impl FromStr for CalculationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relative" => Ok(CalculationMode::Relative),
            "absolute" => Ok(CalculationMode::Absolute),
            _ => Err(ConfigError::UnknownCalculationMode(s.to_string())),
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMode::Relative => f.write_str("relative"),
            CalculationMode::Absolute => f.write_str("absolute"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("Relative".parse(), Ok(CalculationMode::Relative));
        assert_eq!(" absolute ".parse(), Ok(CalculationMode::Absolute));
    }

    #[test]
    fn unknown_mode_is_a_config_error() {
        assert_eq!(
            "diagonal".parse::<CalculationMode>(),
            Err(ConfigError::UnknownCalculationMode("diagonal".into()))
        );
    }
}
