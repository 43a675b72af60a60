//! CLI command handlers.
//!
//! Handlers read from and mutate the [`AppState`] owned by the caller and
//! write human-readable (or JSON) output to the given writer.

mod categories;
mod history;
mod render;
mod snippets;
mod theme;

use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use cs_app::AppState;
use cs_core::ports::SystemClipboardPort;

use crate::cli::Command;

pub struct CommandContext {
    pub state: AppState,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub json: bool,
}

pub fn dispatch(
    command: Command,
    ctx: &mut CommandContext,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::History(cmd) => history::run(cmd, ctx, input, out),
        Command::Snippet(cmd) => snippets::run(cmd, ctx, input, out),
        Command::Category(cmd) => categories::run(cmd, ctx, out),
        Command::Theme(cmd) => theme::run(cmd, ctx, out),
    }
}

/// `None` or `-` means "read the text from stdin".
fn text_or_stdin(arg: Option<String>, input: &mut dyn Read) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
