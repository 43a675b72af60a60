//! ID type wrappers for type safety.

mod id_macro;

pub mod history;
pub mod snippet;

pub use history::HistoryItemId;
pub use snippet::{CategoryId, SnippetId};
