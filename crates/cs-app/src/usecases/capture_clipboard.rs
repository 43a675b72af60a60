use std::sync::Arc;

use anyhow::Result;
use cs_core::ids::HistoryItemId;
use cs_core::ports::SystemClipboardPort;
use tracing::{debug, info, warn};

use crate::AppState;

/// What a capture attempt did to history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Added(HistoryItemId),
    /// Identical text is already in history.
    Duplicate,
    /// The clipboard held no text.
    Empty,
    /// Clipboard access was denied or failed.
    Unavailable,
}

/// Reads the system clipboard and records its text in history.
/// 读取系统剪贴板并将文本写入历史记录。
pub struct CaptureClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CaptureClipboard {
    pub fn from_port(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Unavailable clipboard access counts as "no content": it is logged and
    /// leaves history untouched. Only storage failures are returned as errors.
    #[tracing::instrument(name = "usecase.capture_clipboard.execute", skip_all)]
    pub fn execute(&self, state: &mut AppState) -> Result<CaptureOutcome> {
        let text = match self.clipboard.read_text() {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                debug!("clipboard has no text to capture");
                return Ok(CaptureOutcome::Empty);
            }
            Err(err) => {
                warn!(error = %err, "clipboard unavailable, nothing captured");
                return Ok(CaptureOutcome::Unavailable);
            }
        };

        match state.add_history_item(&text)? {
            Some(id) => {
                info!(id = %id, "clipboard text captured");
                Ok(CaptureOutcome::Added(id))
            }
            None => Ok(CaptureOutcome::Duplicate),
        }
    }
}
