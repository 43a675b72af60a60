use std::io::Write;

use anyhow::Result;

use super::CommandContext;
use crate::cli::ThemeCommand;

pub(super) fn run(cmd: ThemeCommand, ctx: &mut CommandContext, out: &mut dyn Write) -> Result<()> {
    match cmd {
        ThemeCommand::Get { prefers_dark } => {
            let theme = ctx.state.theme();
            writeln!(out, "{theme} (effective: {})", theme.resolve(prefers_dark))?;
        }
        ThemeCommand::Set { theme } => {
            ctx.state.set_theme(theme)?;
            writeln!(out, "Theme set to {theme}")?;
        }
    }
    Ok(())
}
