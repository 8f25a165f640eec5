//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use bingo::{GameVariant, caller::DEFAULT_INBOX_CAPACITY};
use std::{net::SocketAddr, str::FromStr};

/// Bind address used when neither `SERVER_BIND` nor `PORT` is set
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Values given on the command line; they win over the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<SocketAddr>,
    pub metrics_bind: Option<SocketAddr>,
    pub seed: Option<u64>,
}

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP bind address
    pub bind: SocketAddr,
    /// Prometheus exporter address, disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
    /// Seed for reproducible draws, OS entropy when `None`
    pub rng_seed: Option<u64>,
    /// Caller actor inbox capacity
    pub inbox_capacity: usize,
    /// Game started automatically at boot
    pub default_variant: Option<GameVariant>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    ///
    /// Bind precedence: `--bind` > `SERVER_BIND` > `0.0.0.0:$PORT` > [`DEFAULT_BIND`].
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match overrides.bind {
            Some(bind) => bind,
            None => match parse_var::<SocketAddr, _>(&lookup, "SERVER_BIND")? {
                Some(bind) => bind,
                None => match parse_var::<u16, _>(&lookup, "PORT")? {
                    Some(port) => SocketAddr::from(([0, 0, 0, 0], port)),
                    None => DEFAULT_BIND
                        .parse()
                        .expect("Default bind address is valid"),
                },
            },
        };

        let metrics_bind = match overrides.metrics_bind {
            Some(addr) => Some(addr),
            None => parse_var(&lookup, "METRICS_BIND")?,
        };

        let rng_seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, "BINGO_RNG_SEED")?,
        };

        let inbox_capacity =
            parse_var(&lookup, "CALLER_INBOX_CAPACITY")?.unwrap_or(DEFAULT_INBOX_CAPACITY);

        let default_variant = parse_var::<GameVariant, _>(&lookup, "DEFAULT_VARIANT")?;

        Ok(ServerConfig {
            bind,
            metrics_bind,
            rng_seed,
            inbox_capacity,
            default_variant,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inbox_capacity == 0 {
            return Err(ConfigError::Invalid {
                var: "CALLER_INBOX_CAPACITY".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the API bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an optional variable, rejecting values that are set but malformed
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::Invalid {
                    var: key.to_string(),
                    reason: format!("'{raw}': {e}"),
                })
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(CliOverrides::default(), lookup(&[])).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
        assert_eq!(config.metrics_bind, None);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.inbox_capacity, DEFAULT_INBOX_CAPACITY);
        assert_eq!(config.default_variant, None);
        config.validate().unwrap();
    }

    #[test]
    fn test_port_binds_all_interfaces() {
        let config =
            ServerConfig::from_lookup(CliOverrides::default(), lookup(&[("PORT", "3001")]))
                .unwrap();
        assert_eq!(config.bind, "0.0.0.0:3001".parse().unwrap());
    }

    #[test]
    fn test_bind_precedence() {
        let vars = [("PORT", "3001"), ("SERVER_BIND", "127.0.0.1:4000")];
        let config = ServerConfig::from_lookup(CliOverrides::default(), lookup(&vars)).unwrap();
        assert_eq!(config.bind, "127.0.0.1:4000".parse().unwrap());

        let overrides = CliOverrides {
            bind: Some("127.0.0.1:5000".parse().unwrap()),
            ..CliOverrides::default()
        };
        let config = ServerConfig::from_lookup(overrides, lookup(&vars)).unwrap();
        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn test_seed_and_variant_from_env() {
        let vars = [("BINGO_RNG_SEED", "42"), ("DEFAULT_VARIANT", "Britanico")];
        let config = ServerConfig::from_lookup(CliOverrides::default(), lookup(&vars)).unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.default_variant, Some(GameVariant::British));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = ServerConfig::from_lookup(CliOverrides::default(), lookup(&[("PORT", "http")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = ServerConfig::from_lookup(
            CliOverrides::default(),
            lookup(&[("DEFAULT_VARIANT", "roulette")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("roulette"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config =
            ServerConfig::from_lookup(CliOverrides::default(), lookup(&[("METRICS_BIND", " ")]))
                .unwrap();
        assert_eq!(config.metrics_bind, None);
    }

    #[test]
    fn test_validation_zero_capacity() {
        let config = ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            metrics_bind: None,
            rng_seed: None,
            inbox_capacity: 0, // Invalid
            default_variant: None,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validation_metrics_bind_collision() {
        let bind: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let config = ServerConfig {
            bind,
            metrics_bind: Some(bind), // Invalid: same as API
            rng_seed: None,
            inbox_capacity: 10,
            default_variant: None,
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("METRICS_BIND"));
    }
}
