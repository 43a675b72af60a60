//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file into the [`AppConfig`] DTO. Pure data loading: the
//! loader accepts whatever is in the file and never fills in defaults.
//!
//! 仅纯数据加载，接受文件中的任何内容。

use std::path::{Path, PathBuf};

use anyhow::Context;
use cs_core::config::AppConfig;
use tracing::debug;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// An explicitly requested file must exist; the default location is optional.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    default_path: &Path,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(&path);
    }
    if default_path.exists() {
        return load_config(default_path);
    }
    debug!(path = %default_path.display(), "no config file, using empty config");
    Ok(AppConfig::empty())
}
