pub mod capture_clipboard;
pub mod copy_to_clipboard;

pub use capture_clipboard::{CaptureClipboard, CaptureOutcome};
pub use copy_to_clipboard::{CopyOutcome, CopyTarget, CopyToClipboard};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use cs_core::ports::{ClockPort, SystemClipboardPort};
    use cs_infra::InMemoryKeyValueStore;
    use mockall::mock;

    use crate::AppState;

    mock! {
        pub Clipboard {}

        impl SystemClipboardPort for Clipboard {
            fn read_text(&self) -> anyhow::Result<Option<String>>;
            fn write_text(&self, text: &str) -> anyhow::Result<()>;
        }
    }

    pub struct FixedClock(pub AtomicI64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    pub fn memory_state() -> AppState {
        AppState::load(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(FixedClock(AtomicI64::new(1_700_000_000_000))),
        )
        .unwrap()
    }
}
