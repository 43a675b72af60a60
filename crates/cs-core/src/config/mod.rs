//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTOs mapped from TOML. No validation and no default-value
//! policy lives here: missing keys map to empty values and the bootstrap
//! layer decides what an empty value means.
//!
//! 此模块只包含数据结构定义，不做验证，也不计算默认值。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Data directory override (may be empty - this is a fact, not an error)
    pub data_dir: PathBuf,

    /// Log filter directive such as `info` or `cs_app=debug` (may be empty)
    pub log_level: String,

    /// Whether to also write logs to `<data_dir>/logs`
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_level: toml_value
                .get("logging")
                .and_then(|l| l.get("level"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            log_level: String::new(),
            file_logging: false,
        }
    }
}
