use std::io::Write;

use anyhow::{bail, Result};
use cs_core::ids::CategoryId;
use cs_core::snippet::{CategoryRemoval, NewCategory, SnippetCategory};

use super::CommandContext;
use crate::cli::CategoryCommand;

pub(super) fn run(cmd: CategoryCommand, ctx: &mut CommandContext, out: &mut dyn Write) -> Result<()> {
    match cmd {
        CategoryCommand::List => {
            let categories = ctx.state.categories();
            if ctx.json {
                writeln!(out, "{}", serde_json::to_string_pretty(categories)?)?;
                return Ok(());
            }
            for category in categories {
                let count = ctx.state.get_snippets_for_category(category.id()).len();
                let marker = if category.is_protected() {
                    " (protected)"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{}  {}{marker}  {count} snippet(s)",
                    category.id(),
                    category.name()
                )?;
            }
        }
        CategoryCommand::Add { name } => {
            let id = ctx.state.add_category(NewCategory::new(name)?)?;
            writeln!(out, "Added category {id}")?;
        }
        CategoryCommand::Rename { id, name } => {
            let id = CategoryId::from(id);
            if ctx.state.category(&id).is_none() {
                bail!("no category with id {id}");
            }
            ctx.state.update_category(SnippetCategory::new(id.clone(), name)?)?;
            writeln!(out, "Renamed category {id}")?;
        }
        CategoryCommand::Delete { id } => {
            let id = CategoryId::from(id);
            match ctx.state.delete_category(&id)? {
                CategoryRemoval::Protected => {
                    writeln!(out, "Category {id} is built in and cannot be deleted.")?
                }
                CategoryRemoval::Removed {
                    category_removed,
                    cascaded_snippets,
                } => {
                    if !category_removed && cascaded_snippets == 0 {
                        bail!("no category with id {id}");
                    }
                    if category_removed {
                        writeln!(out, "Deleted category {id}")?;
                    }
                    if cascaded_snippets > 0 {
                        writeln!(out, "Removed {cascaded_snippets} snippet(s) filed under it.")?;
                    }
                }
            }
        }
    }
    Ok(())
}
