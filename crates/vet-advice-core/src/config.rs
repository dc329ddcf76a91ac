//! Advisor configuration from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::models::Language;

pub const DB_PATH_VAR: &str = "VET_ADVICE_DB_PATH";
pub const CACHE_TTL_VAR: &str = "VET_ADVICE_CACHE_TTL_SECS";
pub const DEFAULT_LANGUAGE_VAR: &str = "VET_ADVICE_DEFAULT_LANGUAGE";

/// Default translation cache lifetime.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} must be one of lv, ru, en, got {value:?}")]
    InvalidLanguage { var: &'static str, value: String },
}

/// Settings for [`crate::advice::VetAdvisor`] and its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// SQLite file for knowledge and query history; `None` keeps everything in memory
    pub db_path: Option<PathBuf>,
    /// Lifetime of cached translations
    pub cache_ttl: Duration,
    /// Language used when a request names none and detection finds no evidence
    pub default_language: Language,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            default_language: Language::Lv,
        }
    }
}

impl AdvisorConfig {
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
        let defaults = Self::default();

        let db_path = get(DB_PATH_VAR).map(PathBuf::from);

        let cache_ttl = match get(CACHE_TTL_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidDuration {
                    var: CACHE_TTL_VAR,
                    value,
                })?,
            None => defaults.cache_ttl,
        };

        let default_language = match get(DEFAULT_LANGUAGE_VAR) {
            Some(value) => Language::parse(&value).ok_or(ConfigError::InvalidLanguage {
                var: DEFAULT_LANGUAGE_VAR,
                value,
            })?,
            None => defaults.default_language,
        };

        Ok(Self {
            db_path,
            cache_ttl,
            default_language,
        })
    }
}
