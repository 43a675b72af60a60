//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cs_core::AppTheme;

#[derive(Debug, Parser)]
#[command(name = "clipshelf")]
#[command(version, about = "Clipboard history and snippet manager", long_about = None)]
pub struct Cli {
    /// Config file (defaults to `<data dir>/config.toml` when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run only
    #[arg(long, global = true)]
    pub memory: bool,

    /// Print lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Captured clipboard history
    #[command(subcommand)]
    History(HistoryCommand),
    /// Reusable snippets
    #[command(subcommand)]
    Snippet(SnippetCommand),
    /// Snippet categories
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Color theme
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List history, newest first
    List(SearchArgs),
    /// Add text to history (`-` reads stdin)
    Add { text: String },
    /// Add the current clipboard text to history
    Capture,
    /// Pin or unpin an item
    Pin { id: String },
    /// Delete an item
    Delete { id: String },
    /// Delete every unpinned item
    Clear,
    /// Copy an item back to the clipboard
    ///
    /// On X11 the text lives only as long as its owner. clipshelf exits right
    /// after copying, so the copy survives only if a clipboard manager takes it.
    Copy { id: String },
}

#[derive(Debug, Subcommand)]
pub enum SnippetCommand {
    /// List snippets grouped by category
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Create a snippet (content from stdin when `--content` is omitted)
    Add {
        #[arg(short, long)]
        name: String,
        /// Category id (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Change a snippet's fields
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a snippet
    Delete { id: String },
    /// Copy a snippet to the clipboard
    ///
    /// On X11 the text lives only as long as its owner. clipshelf exits right
    /// after copying, so the copy survives only if a clipboard manager takes it.
    Copy { id: String },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List categories
    List,
    /// Create a category
    Add { name: String },
    /// Rename a category
    Rename { id: String, name: String },
    /// Delete a category and all of its snippets
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the stored and effective theme
    Get {
        /// Resolve `system` as dark
        #[arg(long)]
        prefers_dark: bool,
    },
    /// Store a theme: light, dark or system
    Set { theme: AppTheme },
}

#[derive(Debug, Args, Default)]
pub struct SearchArgs {
    /// Case-insensitive filter
    #[arg(short, long)]
    pub search: Option<String>,
}
