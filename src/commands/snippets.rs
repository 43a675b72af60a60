use std::io::{Read, Write};

use anyhow::{anyhow, bail, Result};
use cs_app::{CopyOutcome, CopyTarget, CopyToClipboard};
use cs_core::ids::{CategoryId, SnippetId};
use cs_core::snippet::{NewSnippet, Snippet};

use super::render::preview;
use super::{text_or_stdin, CommandContext};
use crate::cli::SnippetCommand;

pub(super) fn run(
    cmd: SnippetCommand,
    ctx: &mut CommandContext,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        SnippetCommand::List { category, search } => {
            ctx.state.set_search_term(search.search.unwrap_or_default());
            match category {
                Some(category) => list_category(ctx, &CategoryId::from(category), out)?,
                None => list_library(ctx, out)?,
            }
        }
        SnippetCommand::Add {
            name,
            category,
            content,
        } => {
            let category_id = match category {
                Some(id) => CategoryId::from(id),
                None => ctx
                    .state
                    .categories()
                    .first()
                    .map(|c| c.id().clone())
                    .ok_or_else(|| anyhow!("no category available, pass --category"))?,
            };
            let content = text_or_stdin(content, input)?;
            // Validate before the state container sees anything.
            let draft = NewSnippet::new(name, content, category_id)?;
            let id = ctx.state.add_snippet(draft)?;
            writeln!(out, "Added snippet {id}")?;
        }
        SnippetCommand::Edit {
            id,
            name,
            category,
            content,
        } => {
            let id = SnippetId::from(id);
            let current = ctx
                .state
                .snippet(&id)
                .ok_or_else(|| anyhow!("no snippet with id {id}"))?;
            let edited = Snippet::new(
                id.clone(),
                name.unwrap_or_else(|| current.name().to_string()),
                content.unwrap_or_else(|| current.content().to_string()),
                category
                    .map(CategoryId::from)
                    .unwrap_or_else(|| current.category_id().clone()),
            )?;
            ctx.state.update_snippet(edited)?;
            writeln!(out, "Updated snippet {id}")?;
        }
        SnippetCommand::Delete { id } => {
            let id = SnippetId::from(id);
            if !ctx.state.delete_snippet(&id)? {
                bail!("no snippet with id {id}");
            }
            writeln!(out, "Deleted snippet {id}")?;
        }
        SnippetCommand::Copy { id } => {
            let uc = CopyToClipboard::from_port(ctx.clipboard.clone());
            match uc.execute(&ctx.state, &CopyTarget::Snippet(SnippetId::from(id.clone()))) {
                CopyOutcome::Copied => writeln!(out, "Snippet copied to clipboard!")?,
                CopyOutcome::NotFound => bail!("no snippet with id {id}"),
                CopyOutcome::Failed(reason) => writeln!(out, "Copy failed: {reason}")?,
            }
        }
    }
    Ok(())
}

fn list_library(ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let view = ctx.state.snippet_library_view();

    if ctx.json {
        let sections: Vec<_> = view
            .sections
            .iter()
            .map(|section| {
                serde_json::json!({
                    "category": section.category,
                    "snippets": section.snippets,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&sections)?)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(out, "No snippets yet.")?;
        return Ok(());
    }
    if view.sections.is_empty() {
        writeln!(out, "No snippets match your search.")?;
        return Ok(());
    }

    for section in &view.sections {
        writeln!(
            out,
            "{} [{}] ({})",
            section.category.name(),
            section.category.id(),
            section.snippets.len()
        )?;
        for snippet in &section.snippets {
            writeln!(
                out,
                "  {}  {}: {}",
                snippet.id(),
                snippet.name(),
                preview(snippet.content())
            )?;
        }
    }
    Ok(())
}

fn list_category(ctx: &CommandContext, category_id: &CategoryId, out: &mut dyn Write) -> Result<()> {
    let needle = ctx.state.search_term().to_lowercase();
    let snippets: Vec<&Snippet> = ctx
        .state
        .get_snippets_for_category(category_id)
        .into_iter()
        .filter(|s| needle.is_empty() || s.matches(&needle))
        .collect();

    if ctx.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&snippets)?)?;
        return Ok(());
    }

    for snippet in snippets {
        writeln!(
            out,
            "{}  {}: {}",
            snippet.id(),
            snippet.name(),
            preview(snippet.content())
        )?;
    }
    Ok(())
}
