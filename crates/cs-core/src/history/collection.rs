use crate::history::ClipboardItem;
use crate::ids::HistoryItemId;

/// Newest-first collection of captured clipboard items.
///
/// Holds at most one item per distinct `content` value.
/// 每个不同的 `content` 最多保留一条记录。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    items: Vec<ClipboardItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps items loaded from storage as-is, without re-checking uniqueness.
    pub fn from_items(items: Vec<ClipboardItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &HistoryItemId) -> Option<&ClipboardItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Exact match against every item, pinned or not.
    pub fn contains_content(&self, content: &str) -> bool {
        self.items.iter().any(|item| item.content == content)
    }

    /// Prepends a new unpinned item.
    ///
    /// Returns `None` without touching the collection when `content` is empty
    /// or already present.
    pub fn push_front(&mut self, content: &str, created_at: i64) -> Option<HistoryItemId> {
        if content.is_empty() || self.contains_content(content) {
            return None;
        }

        let id = HistoryItemId::new();
        self.items
            .insert(0, ClipboardItem::new_text(id.clone(), content, created_at));
        Some(id)
    }

    /// Flips `is_pinned` and returns the new value, or `None` if the id is unknown.
    pub fn toggle_pin(&mut self, id: &HistoryItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.is_pinned = !item.is_pinned;
        Some(item.is_pinned)
    }

    pub fn remove(&mut self, id: &HistoryItemId) -> Option<ClipboardItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Drops every unpinned item and returns how many were removed.
    pub fn clear_unpinned(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.is_pinned);
        before - self.items.len()
    }
}

/// Items whose content contains `term`, ignoring case. An empty term keeps everything.
pub fn filter_history<'a>(items: &'a [ClipboardItem], term: &str) -> Vec<&'a ClipboardItem> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}
