use std::io::{Read, Write};

use anyhow::{bail, Result};
use cs_app::{CaptureClipboard, CaptureOutcome, CopyOutcome, CopyTarget, CopyToClipboard};
use cs_core::ids::HistoryItemId;

use super::render::{preview, timestamp};
use super::{text_or_stdin, CommandContext};
use crate::cli::HistoryCommand;

pub(super) fn run(
    cmd: HistoryCommand,
    ctx: &mut CommandContext,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        HistoryCommand::List(args) => {
            ctx.state.set_search_term(args.search.unwrap_or_default());
            let items = ctx.state.visible_history();

            if ctx.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
            } else if items.is_empty() {
                writeln!(out, "History is empty.")?;
            } else {
                for item in items {
                    let pin = if item.is_pinned { "*" } else { " " };
                    writeln!(
                        out,
                        "{pin} {}  {}  {}",
                        item.id,
                        timestamp(item.created_at),
                        preview(&item.content)
                    )?;
                }
            }
        }
        HistoryCommand::Add { text } => {
            let text = text_or_stdin(Some(text), input)?;
            match ctx.state.add_history_item(&text)? {
                Some(id) => writeln!(out, "Added {id}")?,
                None if text.is_empty() => writeln!(out, "Nothing to add.")?,
                None => writeln!(out, "Already in history.")?,
            }
        }
        HistoryCommand::Capture => {
            let uc = CaptureClipboard::from_port(ctx.clipboard.clone());
            match uc.execute(&mut ctx.state)? {
                CaptureOutcome::Added(id) => writeln!(out, "Captured {id}")?,
                CaptureOutcome::Duplicate => writeln!(out, "Already in history.")?,
                CaptureOutcome::Empty | CaptureOutcome::Unavailable => {
                    writeln!(out, "No clipboard text available.")?
                }
            }
        }
        HistoryCommand::Pin { id } => {
            let id = HistoryItemId::from(id);
            ctx.state.toggle_pin_history_item(&id)?;
            match ctx.state.history_item(&id) {
                Some(item) if item.is_pinned => writeln!(out, "Pinned {id}")?,
                Some(_) => writeln!(out, "Unpinned {id}")?,
                None => bail!("no history item with id {id}"),
            }
        }
        HistoryCommand::Delete { id } => {
            let id = HistoryItemId::from(id);
            if !ctx.state.delete_history_item(&id)? {
                bail!("no history item with id {id}");
            }
            writeln!(out, "Deleted {id}")?;
        }
        HistoryCommand::Clear => {
            let removed = ctx.state.clear_history()?;
            writeln!(out, "Removed {removed} item(s); pinned items kept.")?;
        }
        HistoryCommand::Copy { id } => {
            let uc = CopyToClipboard::from_port(ctx.clipboard.clone());
            match uc.execute(&ctx.state, &CopyTarget::History(HistoryItemId::from(id.clone()))) {
                CopyOutcome::Copied => writeln!(out, "Copied to clipboard.")?,
                CopyOutcome::NotFound => bail!("no history item with id {id}"),
                CopyOutcome::Failed(reason) => writeln!(out, "Copy failed: {reason}")?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cli::SearchArgs;
    use crate::commands::test_support::{context, FakeClipboard};

    fn run_cmd(cmd: HistoryCommand, ctx: &mut CommandContext) -> String {
        let mut out = Vec::new();
        run(cmd, ctx, &mut std::io::empty(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_reports_duplicates() {
        let mut ctx = context(Arc::default());
        assert!(run_cmd(HistoryCommand::Add { text: "hi".into() }, &mut ctx).starts_with("Added"));
        assert_eq!(
            run_cmd(HistoryCommand::Add { text: "hi".into() }, &mut ctx),
            "Already in history.\n"
        );
        assert_eq!(ctx.state.history().len(), 1);
    }

    #[test]
    fn add_dash_reads_stdin() {
        let mut ctx = context(Arc::default());
        let mut out = Vec::new();
        run(
            HistoryCommand::Add { text: "-".into() },
            &mut ctx,
            &mut "from stdin".as_bytes(),
            &mut out,
        )
        .unwrap();
        assert_eq!(ctx.state.history()[0].content, "from stdin");
    }

    #[test]
    fn capture_and_copy_go_through_the_clipboard() {
        let clipboard = Arc::new(FakeClipboard::default());
        *clipboard.text.lock().unwrap() = Some("clip".to_string());
        let mut ctx = context(clipboard.clone());

        assert!(run_cmd(HistoryCommand::Capture, &mut ctx).starts_with("Captured"));
        let id = ctx.state.history()[0].id.to_string();

        run_cmd(HistoryCommand::Copy { id }, &mut ctx);
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["clip".to_string()]);
    }

    #[test]
    fn capture_without_text_changes_nothing() {
        let mut ctx = context(Arc::default());
        assert_eq!(
            run_cmd(HistoryCommand::Capture, &mut ctx),
            "No clipboard text available.\n"
        );
        assert!(ctx.state.history().is_empty());
    }

    #[test]
    fn list_filters_and_marks_pinned() {
        let mut ctx = context(Arc::default());
        let id = ctx.state.add_history_item("Alpha").unwrap().unwrap();
        ctx.state.add_history_item("beta").unwrap();
        ctx.state.toggle_pin_history_item(&id).unwrap();

        let listing = run_cmd(
            HistoryCommand::List(SearchArgs {
                search: Some("alp".into()),
            }),
            &mut ctx,
        );

        assert_eq!(listing.lines().count(), 1);
        assert!(listing.starts_with("* "));
        assert!(listing.contains("Alpha"));
    }

    #[test]
    fn clear_keeps_pinned_items() {
        let mut ctx = context(Arc::default());
        let id = ctx.state.add_history_item("keep").unwrap().unwrap();
        ctx.state.add_history_item("drop").unwrap();
        run_cmd(HistoryCommand::Pin { id: id.to_string() }, &mut ctx);

        let output = run_cmd(HistoryCommand::Clear, &mut ctx);

        assert!(output.starts_with("Removed 1 item(s)"));
        assert_eq!(ctx.state.history().len(), 1);
        assert_eq!(ctx.state.history()[0].content, "keep");
    }

    #[test]
    fn copying_unknown_item_is_an_error() {
        let mut ctx = context(Arc::default());
        let mut out = Vec::new();
        let result = run(
            HistoryCommand::Copy { id: "nope".into() },
            &mut ctx,
            &mut std::io::empty(),
            &mut out,
        );
        assert!(result.is_err());
    }

    #[test]
    fn delete_reports_the_removed_item_and_rejects_unknown_ids() {
        let mut ctx = context(Arc::default());
        ctx.state.add_history_item("older").unwrap();
        let id = ctx.state.add_history_item("newer").unwrap().unwrap();

        assert_eq!(
            run_cmd(HistoryCommand::Delete { id: id.to_string() }, &mut ctx),
            format!("Deleted {id}\n")
        );
        assert_eq!(ctx.state.history().len(), 1);
        assert_eq!(ctx.state.history()[0].content, "older");

        let mut out = Vec::new();
        let err = run(
            HistoryCommand::Delete { id: id.to_string() },
            &mut ctx,
            &mut std::io::empty(),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), format!("no history item with id {id}"));
        assert!(out.is_empty());
    }
}
