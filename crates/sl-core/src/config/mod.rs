//! Configuration data.
//!
//! `AppConfig` is a plain DTO mapped from the TOML file. Missing values map
//! to empty ones; defaults and validation are applied by the bootstrap layer
//! when it resolves a [`RuntimeSettings`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `[persistence] strategy`, raw as written.
    pub persistence_strategy: String,

    /// `[api] base_url`
    pub api_base_url: String,

    /// `[storage] data_dir` (path info only, no existence check)
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            persistence_strategy: toml_value
                .get("persistence")
                .and_then(|p| p.get("strategy"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    pub fn empty() -> Self {
        Self {
            persistence_strategy: String::new(),
            api_base_url: String::new(),
            data_dir: PathBuf::new(),
        }
    }
}

/// How onboarding steps persist their records.
///
/// One strategy per deployment; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceStrategy {
    /// Fire-and-forget writes to client storage. Failures are logged and the
    /// step advances anyway.
    #[default]
    Local,
    /// Each step is confirmed by the remote API. Failures keep the user on
    /// the step with an inline error.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown persistence strategy '{0}', expected 'local' or 'remote'")]
    UnknownStrategy(String),
}

impl FromStr for PersistenceStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(PersistenceStrategy::Local),
            "remote" => Ok(PersistenceStrategy::Remote),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for PersistenceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceStrategy::Local => write!(f, "local"),
            PersistenceStrategy::Remote => write!(f, "remote"),
        }
    }
}

/// Resolved settings the application runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub strategy: PersistenceStrategy,
    pub api_base_url: String,
    pub data_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_maps_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [persistence]
            strategy = "remote"

            [api]
            base_url = "https://api.smartlearn.test/api"

            [storage]
            data_dir = "/tmp/smartlearn"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.persistence_strategy, "remote");
        assert_eq!(config.api_base_url, "https://api.smartlearn.test/api");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/smartlearn"));
    }

    #[test]
    fn from_toml_missing_values_are_empty() {
        let value: toml::Value = toml::from_str("[api]\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("Local".parse::<PersistenceStrategy>(), Ok(PersistenceStrategy::Local));
        assert_eq!("remote".parse::<PersistenceStrategy>(), Ok(PersistenceStrategy::Remote));
        assert_eq!(
            "both".parse::<PersistenceStrategy>(),
            Err(ConfigError::UnknownStrategy("both".to_string()))
        );
    }
}
