use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use cs_core::ports::SystemClipboardPort;
use tracing::debug;

/// System clipboard backed by `clipboard-rs`.
///
/// A fresh `ClipboardContext` is opened per call so the adapter stays
/// `Send + Sync` on every platform and never holds the clipboard open.
///
/// X11 keeps no copy of written text: the selection is served by the process
/// that set it. In a short-lived process the text disappears on exit unless a
/// clipboard manager has already taken ownership. macOS and Windows keep the
/// text in the system clipboard.
pub struct LocalClipboard;

impl LocalClipboard {
    pub fn new() -> Self {
        Self
    }

    fn context() -> Result<ClipboardContext> {
        ClipboardContext::new().map_err(|e| anyhow!("failed to open system clipboard: {e}"))
    }
}

impl Default for LocalClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let ctx = Self::context()?;
        if !ctx.has(ContentFormat::Text) {
            debug!("clipboard holds no text representation");
            return Ok(None);
        }
        let text = ctx
            .get_text()
            .map_err(|e| anyhow!("failed to read clipboard text: {e}"))?;
        Ok(Some(text))
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = Self::context()?;
        ctx.set_text(text.to_string())
            .map_err(|e| anyhow!("failed to write clipboard text: {e}"))?;
        debug!(bytes = text.len(), "clipboard text written");
        Ok(())
    }
}
