//! Runtime settings, read from `STORE_*` environment variables.
//!
//! The binary loads a `.env` file first (see `main.rs`), so either source works.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Channel capacity of every actor.
    pub channel_buffer: usize,
    /// Checkout tax rate, in `[0, 1)`.
    pub tax_rate: f64,
    pub seed_catalog: bool,
    pub seed_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            tax_rate: 0.08,
            seed_catalog: true,
            seed_users: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing keys use the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            channel_buffer: try_load(&lookup, "STORE_CHANNEL_BUFFER", defaults.channel_buffer)?,
            tax_rate: try_load(&lookup, "STORE_TAX_RATE", defaults.tax_rate)?,
            seed_catalog: try_load(&lookup, "STORE_SEED_CATALOG", defaults.seed_catalog)?,
            seed_users: try_load(&lookup, "STORE_SEED_USERS", defaults.seed_users)?,
        };

        if config.channel_buffer == 0 {
            return Err(invalid("STORE_CHANNEL_BUFFER", "0", "must be at least 1"));
        }
        if !(0.0..1.0).contains(&config.tax_rate) {
            return Err(invalid(
                "STORE_TAX_RATE",
                &config.tax_rate.to_string(),
                "must be at least 0 and below 1",
            ));
        }
        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(key, &raw, e.to_string())),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_vars_use_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("STORE_CHANNEL_BUFFER", "4"),
            ("STORE_TAX_RATE", " 0.1 "),
            ("STORE_SEED_CATALOG", "false"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 4);
        assert_eq!(config.tax_rate, 0.1);
        assert!(!config.seed_catalog);
        assert!(config.seed_users);
    }

    #[test]
    fn test_unparsable_value_is_reported() {
        let err = Config::from_lookup(lookup(&[("STORE_SEED_USERS", "yes")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "STORE_SEED_USERS", ref value, .. } if value == "yes"
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(Config::from_lookup(lookup(&[("STORE_TAX_RATE", "1.0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STORE_TAX_RATE", "-0.01")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STORE_CHANNEL_BUFFER", "0")])).is_err());
    }
}
