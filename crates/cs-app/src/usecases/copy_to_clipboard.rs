use std::sync::Arc;

use cs_core::ids::{HistoryItemId, SnippetId};
use cs_core::ports::SystemClipboardPort;
use tracing::{info, warn};

use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    History(HistoryItemId),
    Snippet(SnippetId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NotFound,
    /// The clipboard rejected the write; carries the reason for display.
    Failed(String),
}

/// Puts a history item's or snippet's content on the system clipboard.
pub struct CopyToClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyToClipboard {
    pub fn from_port(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Never mutates state; a failed write is reported, not raised.
    #[tracing::instrument(name = "usecase.copy_to_clipboard.execute", skip(self, state))]
    pub fn execute(&self, state: &AppState, target: &CopyTarget) -> CopyOutcome {
        let content = match target {
            CopyTarget::History(id) => state.history_item(id).map(|item| item.content.as_str()),
            CopyTarget::Snippet(id) => state.snippet(id).map(|snippet| snippet.content()),
        };

        let Some(content) = content else {
            return CopyOutcome::NotFound;
        };

        match self.clipboard.write_text(content) {
            Ok(()) => {
                info!("content copied to clipboard");
                CopyOutcome::Copied
            }
            Err(err) => {
                warn!(error = %err, "failed to write clipboard");
                CopyOutcome::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{memory_state, MockClipboard};
    use cs_core::ids::CategoryId;
    use cs_core::snippet::NewSnippet;
    use std::sync::Mutex;

    fn recording_clipboard(log: Arc<Mutex<Vec<String>>>) -> MockClipboard {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(move |text| {
            log.lock().unwrap().push(text.to_string());
            Ok(())
        });
        clipboard
    }

    #[test]
    fn copies_history_item_and_snippet_content() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let uc = CopyToClipboard::from_port(Arc::new(recording_clipboard(log.clone())));

        let mut state = memory_state();
        let item = state.add_history_item("from history").unwrap().unwrap();
        let snippet = state
            .add_snippet(NewSnippet::new("n", "from snippet", CategoryId::code()).unwrap())
            .unwrap();

        assert_eq!(
            uc.execute(&state, &CopyTarget::History(item)),
            CopyOutcome::Copied
        );
        assert_eq!(
            uc.execute(&state, &CopyTarget::Snippet(snippet)),
            CopyOutcome::Copied
        );
        assert_eq!(
            *log.lock().unwrap(),
            vec!["from history".to_string(), "from snippet".to_string()]
        );
    }

    #[test]
    fn unknown_target_never_touches_clipboard() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();
        let uc = CopyToClipboard::from_port(Arc::new(clipboard));
        let state = memory_state();

        assert_eq!(
            uc.execute(&state, &CopyTarget::Snippet(SnippetId::from("nope"))),
            CopyOutcome::NotFound
        );
    }

    #[test]
    fn write_failure_is_reported_as_outcome() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("clipboard busy")));
        let uc = CopyToClipboard::from_port(Arc::new(clipboard));

        let mut state = memory_state();
        let id = state.add_history_item("x").unwrap().unwrap();

        assert_eq!(
            uc.execute(&state, &CopyTarget::History(id)),
            CopyOutcome::Failed("clipboard busy".to_string())
        );
    }
}
