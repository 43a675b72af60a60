use std::path::PathBuf;

use cs_core::app_dirs::AppDirs;

/// Concrete file locations derived from the application data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub store_dir: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::from_data_root(dirs.app_data_root.clone())
    }

    pub fn from_data_root(data_root: PathBuf) -> Self {
        Self {
            store_dir: data_root.join("store"),
            config_path: data_root.join("config.toml"),
            logs_dir: data_root.join("logs"),
            data_root,
        }
    }
}
