use serde::{Deserialize, Serialize};

use crate::ids::HistoryItemId;

/// Content kind of a captured clipboard item. Only text is captured today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardItemKind {
    #[default]
    Text,
}

/// A captured piece of clipboard text.
///
/// Serialized with camelCase field names, e.g.
/// `{"id":"..","type":"text","content":"..","createdAt":0,"isPinned":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItem {
    pub id: HistoryItemId,
    #[serde(rename = "type", default)]
    pub kind: ClipboardItemKind,
    pub content: String,
    /// Capture time in milliseconds since the Unix epoch.
    pub created_at: i64,
    pub is_pinned: bool,
}

impl ClipboardItem {
    pub fn new_text(id: HistoryItemId, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            kind: ClipboardItemKind::Text,
            content: content.into(),
            created_at,
            is_pinned: false,
        }
    }

    /// Case-insensitive substring match against the content.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.content.to_lowercase().contains(needle_lowercase)
    }
}
