// ── In-memory store ───────────────────────────────────────────────────────────
//
// Backs `--ephemeral` runs and tests.  Never fails.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// A `HashMap`-backed store that forgets everything on exit.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
