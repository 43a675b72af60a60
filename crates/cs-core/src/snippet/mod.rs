//! Snippet library domain: named text fragments grouped into categories.

mod library;
mod model;
mod view;

pub use library::{CategoryRemoval, SnippetLibrary};
pub use model::{NewCategory, NewSnippet, Snippet, SnippetCategory};
pub use view::{CategorySection, SnippetLibraryView};
