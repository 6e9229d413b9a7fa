//! # Configuration Loader
//!
//! Reads the TOML file and maps it to the [`AppConfig`] DTO.
//!
//! Pure data loading only: no validation, no defaults. Empty values are
//! facts; the bootstrap layer decides what they mean.

use anyhow::Context;
use std::path::Path;

use sl_core::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "smartlearn.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
