use std::path::{Path, PathBuf};

use sl_core::app_dirs::AppDirs;

/// Concrete file locations derived from the resolved data and config roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_path: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::new(&dirs.app_data_root, &dirs.app_config_root)
    }

    pub fn new(data_dir: &Path, config_dir: &Path) -> Self {
        Self {
            storage_path: data_dir.join("client_storage.json"),
            logs_dir: data_dir.join("logs"),
            config_path: config_dir.join("smartlearn.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_locations_from_roots() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/smartlearn"),
            app_config_root: PathBuf::from("/etc/smartlearn"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.storage_path, PathBuf::from("/tmp/smartlearn/client_storage.json"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/smartlearn/logs"));
        assert_eq!(paths.config_path, PathBuf::from("/etc/smartlearn/smartlearn.toml"));
    }
}
