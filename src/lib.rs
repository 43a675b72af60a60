//! clipshelf: clipboard history and snippet manager.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cs_app::app_paths::AppPaths;
use cs_core::ports::AppDirsPort;
use cs_core::AppConfig;
use cs_platform::app_dirs::DirsAppDirsAdapter;
use cs_platform::clipboard::LocalClipboard;
use tracing::debug;

use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::{build_state, load_config, resolve_config, resolve_data_root, StoreChoice};
use crate::cli::Cli;
use crate::commands::{dispatch, CommandContext};

/// Parses the command line and runs one command against the local profile.
pub fn run() -> Result<()> {
    run_cli(Cli::parse())
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let app_dirs = DirsAppDirsAdapter::new();

    // The config file lives in the data root, which the config itself may move.
    let default_root: Option<PathBuf> = cli
        .data_dir
        .clone()
        .or_else(|| app_dirs.get_app_dirs().ok().map(|dirs| dirs.app_data_root));
    let config = match default_root {
        Some(root) => resolve_config(cli.config.clone(), &AppPaths::from_data_root(root).config_path)?,
        None => match &cli.config {
            Some(path) => load_config(path)?,
            None => AppConfig::empty(),
        },
    };

    let paths = AppPaths::from_data_root(resolve_data_root(cli.data_dir.clone(), &config, &app_dirs)?);

    let logs_dir = config.file_logging.then_some(paths.logs_dir.as_path());
    init_tracing_subscriber(&config.log_level, logs_dir)?;
    debug!(data_root = %paths.data_root.display(), "paths resolved");

    let store = if cli.memory {
        StoreChoice::Memory
    } else {
        StoreChoice::File(paths.store_dir.clone())
    };

    let mut ctx = CommandContext {
        state: build_state(&store)?,
        clipboard: Arc::new(LocalClipboard::new()),
        json: cli.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    dispatch(cli.command, &mut ctx, &mut stdin.lock(), &mut stdout.lock())
}
