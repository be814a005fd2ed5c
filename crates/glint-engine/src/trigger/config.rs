use std::time::Duration;

use crate::error::ConfigError;

/// Update-loop configuration.
///
/// Environment overrides (see [`TriggerConfig::apply_env`]):
/// - `GLINT_UPDATE_RATE`: updates per second
/// - `GLINT_FLUSH`: `1`/`true`/`yes`/`on` to push every LED every cycle
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerConfig {
    /// Updates per second.
    pub update_rate: f64,

    /// Passed to every device update. `false` lets devices push only dirty LEDs.
    pub flush_leds: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            update_rate: 30.0,
            flush_leds: false,
        }
    }
}

impl TriggerConfig {
    pub const ENV_UPDATE_RATE: &'static str = "GLINT_UPDATE_RATE";
    pub const ENV_FLUSH: &'static str = "GLINT_FLUSH";

    /// The rate must be finite, positive, and give an interval a [`Duration`] can hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let representable = Duration::try_from_secs_f64(1.0 / self.update_rate).is_ok();
        if self.update_rate.is_finite() && self.update_rate > 0.0 && representable {
            Ok(())
        } else {
            Err(ConfigError::InvalidUpdateRate(self.update_rate))
        }
    }

    /// Time between update starts. Rates that fail [`validate`](Self::validate)
    /// saturate to [`Duration::MAX`].
    pub fn interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.update_rate).unwrap_or(Duration::MAX)
    }

    /// Applies `GLINT_UPDATE_RATE` / `GLINT_FLUSH` from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        let rate = std::env::var(Self::ENV_UPDATE_RATE).ok();
        let flush = std::env::var(Self::ENV_FLUSH).ok();
        self.apply_overrides(rate.as_deref(), flush.as_deref())
    }

    /// Applies textual overrides, then validates.
    pub fn apply_overrides(&mut self, update_rate: Option<&str>, flush_leds: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = update_rate {
            self.update_rate = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: Self::ENV_UPDATE_RATE,
                value: raw.to_string(),
            })?;
        }

        if let Some(raw) = flush_leds {
            self.flush_leds = parse_bool(raw).ok_or_else(|| ConfigError::InvalidValue {
                key: Self::ENV_FLUSH,
                value: raw.to_string(),
            })?;
        }

        self.validate()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = TriggerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interval(), Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn rejects_non_positive_rates() {
        for rate in [0.0, -5.0, f64::NAN, f64::INFINITY, 1e-20, f64::MIN_POSITIVE / 4.0] {
            let config = TriggerConfig {
                update_rate: rate,
                ..TriggerConfig::default()
            };
            assert!(config.validate().is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn overrides_are_parsed() {
        let mut config = TriggerConfig::default();
        config.apply_overrides(Some(" 60 "), Some("YES")).unwrap();
        assert_eq!(config.update_rate, 60.0);
        assert!(config.flush_leds);
    }

    #[test]
    fn bad_override_names_the_key() {
        let mut config = TriggerConfig::default();
        let err = config.apply_overrides(None, Some("sometimes")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: TriggerConfig::ENV_FLUSH,
                value: "sometimes".into()
            }
        );
    }

    #[test]
    fn tiny_rate_override_fails_validation_instead_of_overflowing() {
        let mut config = TriggerConfig::default();
        assert_eq!(
            config.apply_overrides(Some("1e-20"), None),
            Err(ConfigError::InvalidUpdateRate(1e-20))
        );
        assert_eq!(config.interval(), Duration::MAX);
    }

    #[test]
    fn slowest_representable_rate_is_accepted() {
        let config = TriggerConfig {
            update_rate: 1e-9,
            ..TriggerConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.interval() > Duration::from_secs(900_000_000));
    }

    #[test]
    fn zero_rate_override_fails_validation() {
        let mut config = TriggerConfig::default();
        assert_eq!(
            config.apply_overrides(Some("0"), None),
            Err(ConfigError::InvalidUpdateRate(0.0))
        );
    }
}
