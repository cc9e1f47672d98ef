// ── Persisted text field ──────────────────────────────────────────────────────
//
// One named text value that is read from the store on startup and written
// back on every change.  The store is passed into each call rather than held,
// so several fields can share one store owned by `App`.

use crate::store::{self, KeyValueStore};

/// A text value that survives restarts through a `KeyValueStore`.
///
/// With `max_len` set the field is *bounded*.  The bound is advisory at this
/// level: `set_value` stores whatever it is given, and callers that accept
/// user input run it through [`PersistedField::clamp`] first.
#[derive(Debug)]
pub(crate) struct PersistedField {
    key: &'static str,
    value: String,
    max_len: Option<usize>,
}

impl PersistedField {
    /// Create the field from whatever the store holds under `key`.
    pub(crate) fn load(store: &dyn KeyValueStore, key: &'static str, max_len: Option<usize>) -> Self {
        Self {
            key,
            value: store::load(store, key),
            max_len,
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and write it through to the store.
    pub(crate) fn set_value(&mut self, store: &mut dyn KeyValueStore, new_value: impl Into<String>) {
        self.value = new_value.into();
        store::save(store, self.key, &self.value);
    }

    /// Reset to the empty string and write through.
    pub(crate) fn clear(&mut self, store: &mut dyn KeyValueStore) {
        self.set_value(store, String::new());
    }

    /// Length in characters.
    pub(crate) fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub(crate) fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Characters left before the bound, or `None` for an unbounded field.
    /// Saturates at zero for values loaded from an older, longer store entry.
    pub(crate) fn remaining(&self) -> Option<usize> {
        self.max_len.map(|max| max.saturating_sub(self.len()))
    }

    /// The longest prefix of `input` that fits within the bound.
    pub(crate) fn clamp<'a>(&self, input: &'a str) -> &'a str {
        let Some(max) = self.max_len else {
            return input;
        };
        match input.char_indices().nth(max) {
            Some((byte_idx, _)) => &input[..byte_idx],
            None => input,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{tests::FailingStore, MemoryStore, CHAR_INPUT_KEY, MSG_INPUT_KEY};

    #[test]
    fn load_reads_previous_value() {
        let mut store = MemoryStore::default();
        store::save(&mut store, CHAR_INPUT_KEY, "draft");
        let field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        assert_eq!(field.value(), "draft");
        assert_eq!(field.key(), CHAR_INPUT_KEY);
    }

    #[test]
    fn set_value_writes_through() {
        let mut store = MemoryStore::default();
        let mut field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        field.set_value(&mut store, "typed");
        assert_eq!(field.value(), "typed");
        assert_eq!(store::load(&store, CHAR_INPUT_KEY), "typed");
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut store = MemoryStore::default();
        let mut field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        field.set_value(&mut store, "something");
        field.clear(&mut store);
        assert_eq!(field.value(), "");
        assert_eq!(store::load(&store, CHAR_INPUT_KEY), "");
    }

    #[test]
    fn unavailable_store_still_tracks_value() {
        let mut store = FailingStore;
        let mut field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        assert_eq!(field.value(), "");
        field.set_value(&mut store, "kept in memory");
        assert_eq!(field.value(), "kept in memory");
    }

    #[test]
    fn bounded_accepts_exactly_max() {
        let mut store = MemoryStore::default();
        let mut field = PersistedField::load(&store, MSG_INPUT_KEY, Some(100));
        let input = "x".repeat(100);
        let clamped = field.clamp(&input).to_owned();
        field.set_value(&mut store, clamped);
        assert_eq!(field.len(), 100);
        assert_eq!(field.remaining(), Some(0));
    }

    #[test]
    fn clamp_cuts_over_long_input() {
        let store = MemoryStore::default();
        let field = PersistedField::load(&store, MSG_INPUT_KEY, Some(100));
        let input = "y".repeat(101);
        assert_eq!(field.clamp(&input).chars().count(), 100);
    }

    // The core does not re-validate: enforcement is the caller's job.
    #[test]
    fn set_value_does_not_truncate() {
        let mut store = MemoryStore::default();
        let mut field = PersistedField::load(&store, MSG_INPUT_KEY, Some(100));
        field.set_value(&mut store, "z".repeat(101));
        assert_eq!(field.len(), 101);
        assert_eq!(field.remaining(), Some(0));
    }

    #[test]
    fn clamp_respects_char_boundaries() {
        let store = MemoryStore::default();
        let field = PersistedField::load(&store, MSG_INPUT_KEY, Some(3));
        assert_eq!(field.clamp("héllo"), "hél");
        assert_eq!(field.clamp("hé"), "hé");
    }

    #[test]
    fn unbounded_field_never_clamps() {
        let store = MemoryStore::default();
        let field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        let input = "w".repeat(10_000);
        assert_eq!(field.clamp(&input).len(), 10_000);
        assert_eq!(field.remaining(), None);
        assert_eq!(field.max_len(), None);
    }

    #[test]
    fn blank_ignores_whitespace() {
        let mut store = MemoryStore::default();
        let mut field = PersistedField::load(&store, CHAR_INPUT_KEY, None);
        field.set_value(&mut store, "  \n ");
        assert!(field.is_blank());
        assert_eq!(field.len(), 4);
    }
}
