//! # Dependency Injection / 依赖注入模块
//!
//! The only place allowed to depend on cs-infra + cs-platform + cs-app
//! simultaneously. Assembly only, no business decisions.
//! 这是唯一允许同时依赖 cs-infra、cs-platform 和 cs-app 的地方。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cs_app::AppState;
use cs_core::config::AppConfig;
use cs_core::ports::{AppDirsPort, KeyValueStorePort};
use cs_infra::{FileKeyValueStore, InMemoryKeyValueStore, SystemClock};
use tracing::info;

/// Where persisted state lives for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    File(PathBuf),
    Memory,
}

/// CLI flag > config file > platform data directory.
pub fn resolve_data_root(
    cli_override: Option<PathBuf>,
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir);
    }
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(config.data_dir.clone());
    }
    let dirs = app_dirs
        .get_app_dirs()
        .context("failed to resolve application data directory")?;
    Ok(dirs.app_data_root)
}

pub fn build_store(choice: &StoreChoice) -> Arc<dyn KeyValueStorePort> {
    match choice {
        StoreChoice::File(dir) => Arc::new(FileKeyValueStore::with_base_dir(dir.clone())),
        StoreChoice::Memory => Arc::new(InMemoryKeyValueStore::new()),
    }
}

pub fn build_state(choice: &StoreChoice) -> anyhow::Result<AppState> {
    info!(store = ?choice, "loading application state");
    AppState::load(build_store(choice), Arc::new(SystemClock))
}
