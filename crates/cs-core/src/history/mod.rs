//! Clipboard history domain.
//!
//! Captured clipboard text lives here as [`ClipboardItem`] records inside a
//! newest-first [`History`] collection.

mod collection;
mod item;

pub use collection::{filter_history, History};
pub use item::{ClipboardItem, ClipboardItemKind};
