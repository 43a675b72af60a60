//! Storage port - abstracts the persisted key-value store
//!
//! Every collection the application keeps is stored under its own key as a
//! serialized string. Implementations can be file-backed, in-memory (tests)
//! or anything else that survives the lifetime the caller needs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage error: {0}")]
    Other(String),
}

/// Synchronous string key-value store.
///
/// `set` replaces the whole value; there is no partial update and no
/// cross-process locking (last writer wins).
/// 同步的字符串键值存储；`set` 覆盖整个值，多进程之间以最后一次写入为准。
pub trait KeyValueStorePort: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
