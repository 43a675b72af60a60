//! # Application State Container / 应用状态容器
//!
//! [`AppState`] is the single source of truth for everything clipshelf
//! persists. It is built once at the composition root and passed around
//! explicitly; there is no global instance.
//!
//! Every mutation:
//! 1. applies the change to the in-memory collection,
//! 2. writes the affected collection in full to the key-value store,
//! 3. broadcasts a [`StateChange`] to subscribers.
//!
//! Mutations that turn out to be no-ops (unknown id, duplicate content,
//! protected category) write nothing and broadcast nothing.

mod keys;
mod persistence;

use std::sync::Arc;

use anyhow::Result;
use cs_core::history::{filter_history, ClipboardItem, History};
use cs_core::ids::{CategoryId, HistoryItemId, SnippetId};
use cs_core::ports::{ClockPort, KeyValueStorePort};
use cs_core::settings::AppTheme;
use cs_core::snippet::{
    CategoryRemoval, NewCategory, NewSnippet, Snippet, SnippetCategory, SnippetLibrary,
    SnippetLibraryView,
};
use tokio::sync::broadcast;
use tracing::{debug, info};

pub use keys::{CATEGORIES_KEY, HISTORY_KEY, SNIPPETS_KEY, THEME_KEY};

use persistence::{load_slot, save_slot};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Which slice of the state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    History,
    Snippets,
    Categories,
    Theme,
    SearchTerm,
}

pub struct AppState {
    store: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
    history: History,
    library: SnippetLibrary,
    theme: AppTheme,
    search_term: String,
    changes: broadcast::Sender<StateChange>,
}

impl AppState {
    /// Loads every slot from `store`, falling back to defaults for absent keys:
    /// empty history and snippets, the seeded categories, and `system` theme.
    pub fn load(store: Arc<dyn KeyValueStorePort>, clock: Arc<dyn ClockPort>) -> Result<Self> {
        let history: Vec<ClipboardItem> =
            load_slot(store.as_ref(), HISTORY_KEY)?.unwrap_or_default();
        let snippets: Vec<Snippet> = load_slot(store.as_ref(), SNIPPETS_KEY)?.unwrap_or_default();
        let categories: Vec<SnippetCategory> =
            load_slot(store.as_ref(), CATEGORIES_KEY)?.unwrap_or_else(SnippetCategory::seeded);
        let theme: AppTheme = load_slot(store.as_ref(), THEME_KEY)?.unwrap_or_default();

        debug!(
            history = history.len(),
            snippets = snippets.len(),
            categories = categories.len(),
            %theme,
            "application state loaded"
        );

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Ok(Self {
            store,
            clock,
            history: History::from_items(history),
            library: SnippetLibrary::from_parts(snippets, categories),
            theme,
            search_term: String::new(),
            changes,
        })
    }

    /// Receives a [`StateChange`] after every effective mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    // === Reads ===

    pub fn history(&self) -> &[ClipboardItem] {
        self.history.items()
    }

    pub fn history_item(&self, id: &HistoryItemId) -> Option<&ClipboardItem> {
        self.history.get(id)
    }

    /// History narrowed by the current search term.
    pub fn visible_history(&self) -> Vec<&ClipboardItem> {
        filter_history(self.history.items(), &self.search_term)
    }

    pub fn snippets(&self) -> &[Snippet] {
        self.library.snippets()
    }

    pub fn snippet(&self, id: &SnippetId) -> Option<&Snippet> {
        self.library.snippet(id)
    }

    pub fn categories(&self) -> &[SnippetCategory] {
        self.library.categories()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&SnippetCategory> {
        self.library.category(id)
    }

    pub fn get_snippets_for_category(&self, category_id: &CategoryId) -> Vec<&Snippet> {
        self.library.snippets_for_category(category_id)
    }

    /// Snippets grouped by category, narrowed by the current search term.
    pub fn snippet_library_view(&self) -> SnippetLibraryView {
        SnippetLibraryView::build(
            self.library.categories(),
            self.library.snippets(),
            &self.search_term,
        )
    }

    pub fn theme(&self) -> AppTheme {
        self.theme
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    // === History ===

    /// Prepends `content` unless it is empty or already in history.
    ///
    /// Returns the new item's id, or `None` when nothing was added.
    #[tracing::instrument(name = "state.add_history_item", skip(self, content), fields(len = content.len()))]
    pub fn add_history_item(&mut self, content: &str) -> Result<Option<HistoryItemId>> {
        let now = self.clock.now_ms();
        let Some(id) = self.history.push_front(content, now) else {
            debug!("history item skipped: empty or duplicate");
            return Ok(None);
        };

        self.persist_history()?;
        info!(id = %id, "history item added");
        self.notify(StateChange::History);
        Ok(Some(id))
    }

    #[tracing::instrument(name = "state.toggle_pin_history_item", skip(self), fields(id = %id))]
    pub fn toggle_pin_history_item(&mut self, id: &HistoryItemId) -> Result<()> {
        let Some(pinned) = self.history.toggle_pin(id) else {
            debug!("history item not found");
            return Ok(());
        };

        self.persist_history()?;
        info!(pinned, "history item pin toggled");
        self.notify(StateChange::History);
        Ok(())
    }

    #[tracing::instrument(name = "state.delete_history_item", skip(self), fields(id = %id))]
    pub fn delete_history_item(&mut self, id: &HistoryItemId) -> Result<bool> {
        if self.history.remove(id).is_none() {
            debug!("history item not found");
            return Ok(false);
        }

        self.persist_history()?;
        info!("history item deleted");
        self.notify(StateChange::History);
        Ok(true)
    }

    /// Removes every unpinned item. Returns how many were removed.
    pub fn clear_history(&mut self) -> Result<usize> {
        let removed = self.history.clear_unpinned();
        if removed == 0 {
            debug!("clear history: nothing to remove");
            return Ok(0);
        }

        self.persist_history()?;
        info!(removed, kept = self.history.len(), "history cleared");
        self.notify(StateChange::History);
        Ok(removed)
    }

    // === Snippets ===

    pub fn add_snippet(&mut self, draft: NewSnippet) -> Result<SnippetId> {
        let id = self.library.add_snippet(draft);
        self.persist_snippets()?;
        info!(id = %id, "snippet added");
        self.notify(StateChange::Snippets);
        Ok(id)
    }

    /// Replaces the snippet with the same id. The category reference is not checked.
    pub fn update_snippet(&mut self, snippet: Snippet) -> Result<bool> {
        let id = snippet.id().clone();
        if !self.library.update_snippet(snippet) {
            debug!(id = %id, "snippet not found");
            return Ok(false);
        }

        self.persist_snippets()?;
        info!(id = %id, "snippet updated");
        self.notify(StateChange::Snippets);
        Ok(true)
    }

    pub fn delete_snippet(&mut self, id: &SnippetId) -> Result<bool> {
        if !self.library.delete_snippet(id) {
            debug!(id = %id, "snippet not found");
            return Ok(false);
        }

        self.persist_snippets()?;
        info!(id = %id, "snippet deleted");
        self.notify(StateChange::Snippets);
        Ok(true)
    }

    // === Categories ===

    pub fn add_category(&mut self, draft: NewCategory) -> Result<CategoryId> {
        let id = self.library.add_category(draft);
        self.persist_categories()?;
        info!(id = %id, "category added");
        self.notify(StateChange::Categories);
        Ok(id)
    }

    pub fn update_category(&mut self, category: SnippetCategory) -> Result<bool> {
        let id = category.id().clone();
        if !self.library.update_category(category) {
            debug!(id = %id, "category not found");
            return Ok(false);
        }

        self.persist_categories()?;
        info!(id = %id, "category updated");
        self.notify(StateChange::Categories);
        Ok(true)
    }

    /// Deletes a category together with its snippets. Built-in categories are left alone.
    #[tracing::instrument(name = "state.delete_category", skip(self), fields(id = %id))]
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<CategoryRemoval> {
        let removal = self.library.delete_category(id);

        match removal {
            CategoryRemoval::Protected => {
                debug!("protected category, deletion ignored");
            }
            CategoryRemoval::Removed {
                category_removed,
                cascaded_snippets,
            } => {
                if removal.changed_categories() {
                    self.persist_categories()?;
                    self.notify(StateChange::Categories);
                }
                if removal.changed_snippets() {
                    self.persist_snippets()?;
                    self.notify(StateChange::Snippets);
                }
                info!(category_removed, cascaded_snippets, "category deleted");
            }
        }

        Ok(removal)
    }

    // === UI fields ===

    /// Not persisted.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.notify(StateChange::SearchTerm);
    }

    pub fn set_theme(&mut self, theme: AppTheme) -> Result<()> {
        if theme == self.theme {
            return Ok(());
        }
        self.theme = theme;
        save_slot(self.store.as_ref(), THEME_KEY, &self.theme)?;
        info!(%theme, "theme changed");
        self.notify(StateChange::Theme);
        Ok(())
    }

    // === Internals ===

    fn persist_history(&self) -> Result<()> {
        save_slot(self.store.as_ref(), HISTORY_KEY, self.history.items())
    }

    fn persist_snippets(&self) -> Result<()> {
        save_slot(self.store.as_ref(), SNIPPETS_KEY, self.library.snippets())
    }

    fn persist_categories(&self) -> Result<()> {
        save_slot(self.store.as_ref(), CATEGORIES_KEY, self.library.categories())
    }

    fn notify(&self, change: StateChange) {
        // No receivers is fine: nobody is listening yet.
        let _ = self.changes.send(change);
    }
}
