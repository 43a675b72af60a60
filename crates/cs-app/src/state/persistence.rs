use anyhow::{Context, Result};
use cs_core::ports::KeyValueStorePort;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Reads and decodes one slot.
///
/// A missing key yields `Ok(None)`. A value that no longer decodes is logged
/// and also treated as missing so the caller falls back to its default.
pub(crate) fn load_slot<T: DeserializeOwned>(
    store: &dyn KeyValueStorePort,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = store
        .get(key)
        .with_context(|| format!("failed to read `{key}` from store"))?
    else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, error = %err, "stored value is unreadable, using default");
            Ok(None)
        }
    }
}

/// Serializes `value` and replaces the whole slot.
pub(crate) fn save_slot<T: Serialize + ?Sized>(
    store: &dyn KeyValueStorePort,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("failed to serialize `{key}`"))?;
    store
        .set(key, &raw)
        .with_context(|| format!("failed to persist `{key}`"))
}
