//! Bot client configuration from the environment.

use std::env;
use std::time::Duration;

use vet_advice_core::config::ConfigError;

pub const SERVICE_URL_VAR: &str = "VET_BOT_SERVICE_URL";
pub const TIMEOUT_VAR: &str = "VET_BOT_TIMEOUT_SECS";

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Service root; API paths are resolved under `{base_url}/api/v1`
    pub base_url: String,
    /// Connect, read and write timeout for each request
    pub timeout: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BotConfig {
    /// Load from process environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = get(SERVICE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.into());

        let timeout = match get(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidDuration {
                    var: TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_vars() {
        let config = BotConfig::from_vars(|name| match name {
            SERVICE_URL_VAR => Some("https://bot.example.lv/".into()),
            TIMEOUT_VAR => Some("5".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "https://bot.example.lv");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = BotConfig::from_vars(|name| (name == TIMEOUT_VAR).then(|| "soon".into()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: TIMEOUT_VAR,
                value: "soon".into()
            }
        );
    }
}
