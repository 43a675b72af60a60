//! # cs-core
//!
//! Core domain models and business rules for clipshelf.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod history;
pub mod ids;
pub mod ports;
pub mod settings;
pub mod snippet;
mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use history::{ClipboardItem, History};
pub use ids::{CategoryId, HistoryItemId, SnippetId};
pub use settings::{AppTheme, EffectiveTheme};
pub use snippet::{NewCategory, NewSnippet, Snippet, SnippetCategory, SnippetLibrary};
pub use validation::ValidationError;
