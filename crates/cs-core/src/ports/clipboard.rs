//! Clipboard port - abstracts system clipboard access

use anyhow::Result;

/// Plain-text access to the operating system clipboard.
pub trait SystemClipboardPort: Send + Sync {
    /// Reads the current clipboard text.
    ///
    /// Returns `Ok(None)` when the clipboard holds no text. Errors cover
    /// denied or unavailable clipboard access.
    fn read_text(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;
}
