//! Tracing configuration for clipshelf
//!
//! - **Environment filter**: `RUST_LOG` wins, then the configured level,
//!   then `debug` in debug builds and `warn` otherwise
//! - **stderr**: always, so command output on stdout stays clean
//! - **File**: optional, `<logs_dir>/clipshelf.log` through a non-blocking writer

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// A non-empty `configured_level` replaces the build-dependent base level.
fn build_filter_directives(is_dev: bool, configured_level: &str) -> Vec<String> {
    let base = if !configured_level.trim().is_empty() {
        configured_level.trim().to_string()
    } else if is_dev {
        "debug".to_string()
    } else {
        "warn".to_string()
    };

    vec![
        base,
        "clipboard_rs=warn".to_string(), // X11/Wayland backends are chatty at debug
    ]
}

/// Initialize the tracing subscriber. Call once, before any command runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(configured_level: &str, logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), configured_level);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, "clipshelf.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev = build_filter_directives(true, "");
        assert_eq!(dev[0], "debug");
        assert!(dev.contains(&"clipboard_rs=warn".to_string()));

        let prod = build_filter_directives(false, "");
        assert_eq!(prod[0], "warn");
    }

    #[test]
    fn configured_level_replaces_base_level() {
        let directives = build_filter_directives(false, " trace ");
        assert_eq!(directives[0], "trace");
    }
}
