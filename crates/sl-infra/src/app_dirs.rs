use std::path::PathBuf;

use sl_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "smartlearn";

/// Resolves the data and config roots from the platform directories.
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Adapter rooted at `base` for both data and config.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_data_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.clone()),
            None => dirs::data_local_dir(),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.clone()),
            None => dirs::config_dir(),
        }
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let data = self
            .base_data_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;
        let config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: data.join(APP_DIR_NAME),
            app_config_root: config.join(APP_DIR_NAME),
        })
    }
}
