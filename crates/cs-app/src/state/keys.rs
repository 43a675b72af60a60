//! Store keys, one slot per persisted collection.

pub const HISTORY_KEY: &str = "clipshelf-history";
pub const SNIPPETS_KEY: &str = "clipshelf-snippets";
pub const CATEGORIES_KEY: &str = "clipshelf-categories";
pub const THEME_KEY: &str = "clipshelf-theme";
