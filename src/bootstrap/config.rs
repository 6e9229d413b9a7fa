//! Settings resolution.
//!
//! Precedence, highest first: command-line flags, environment
//! (`SMARTLEARN_API_URL`, `SMARTLEARN_DATA_DIR`), the TOML file, built-in
//! defaults. The TOML loader itself accepts whatever is in the file; this is
//! where empty values get their defaults and the strategy is validated.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sl_app::AppPaths;
use sl_core::app_dirs::AppDirs;
use sl_core::config::DEFAULT_API_BASE_URL;
use sl_core::{AppConfig, PersistenceStrategy, RuntimeSettings};
use sl_infra::load_config;
use tracing::debug;

pub const ENV_API_URL: &str = "SMARTLEARN_API_URL";
pub const ENV_DATA_DIR: &str = "SMARTLEARN_DATA_DIR";

/// Values taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub api_base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            api_base_url: non_empty_var(ENV_API_URL),
            data_dir: non_empty_var(ENV_DATA_DIR).map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read the config file. A missing default file means "no config"; a
/// missing file the user named explicitly is an error.
pub fn read_config(explicit: Option<&Path>, dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = AppPaths::from_app_dirs(dirs).config_path;
            if path.exists() {
                load_config(&path)
            } else {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(AppConfig::empty())
            }
        }
    }
}

pub fn resolve_settings(
    config: &AppConfig,
    env: &EnvOverrides,
    data_dir_flag: Option<PathBuf>,
    dirs: &AppDirs,
) -> anyhow::Result<RuntimeSettings> {
    let strategy = if config.persistence_strategy.trim().is_empty() {
        PersistenceStrategy::default()
    } else {
        config
            .persistence_strategy
            .parse::<PersistenceStrategy>()
            .context("Invalid [persistence] strategy in config")?
    };

    let api_base_url = env
        .api_base_url
        .clone()
        .or_else(|| Some(config.api_base_url.clone()).filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let data_dir = data_dir_flag
        .or_else(|| env.data_dir.clone())
        .or_else(|| Some(config.data_dir.clone()).filter(|dir| !dir.as_os_str().is_empty()))
        .unwrap_or_else(|| dirs.app_data_root.clone());

    Ok(RuntimeSettings {
        strategy,
        api_base_url,
        data_dir,
    })
}
