// ── Key-value persistence ─────────────────────────────────────────────────────
//
// The `KeyValueStore` trait is the only boundary through which text and theme
// preferences survive a restart.  Implementations report failures as explicit
// `Result`s; `load` and `save` below are the best-effort wrappers the rest of
// the crate uses, logging and swallowing those failures.

pub mod json_file;
pub mod memory;

use crate::error::Result;

pub(crate) use json_file::JsonFileStore;
pub(crate) use memory::MemoryStore;

/// Key under which the character counter's text is stored.
pub(crate) const CHAR_INPUT_KEY: &str = "charInputText";
/// Key under which the message counter's text is stored.
pub(crate) const MSG_INPUT_KEY: &str = "msgInputText";
/// Key under which the theme preference is stored.
pub(crate) const THEME_KEY: &str = "theme";

/// A synchronous, local string-to-string store.
pub(crate) trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read `key`, defaulting to an empty string when it is absent or unreadable.
pub(crate) fn load(store: &dyn KeyValueStore, key: &str) -> String {
    match store.get(key) {
        Ok(Some(value)) => {
            tracing::debug!(key, len = value.len(), "loaded");
            value
        }
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed; using empty value");
            String::new()
        }
    }
}

/// Write `value` under `key`.  Failures are logged, never returned.
pub(crate) fn save(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    match store.set(key, value) {
        Ok(()) => tracing::debug!(key, len = value.len(), "saved"),
        Err(e) => tracing::warn!(key, error = %e, "store write failed; change not persisted"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
