// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in textbox return `error::Result<T>`.  Store
// failures are recovered locally by `store::load` / `store::save`; only
// startup failures reach `main`.

use thiserror::Error;

/// Every error that textbox can produce.
#[derive(Debug, Error)]
pub enum TextboxError {
    /// Reading `key` from the key-value store failed.
    #[error("failed to read {key:?} from the store")]
    StoreRead {
        key: String,
        #[source]
        source: Box<TextboxError>,
    },

    /// Writing `key` to the key-value store failed.
    #[error("failed to write {key:?} to the store")]
    StoreWrite {
        key: String,
        #[source]
        source: Box<TextboxError>,
    },

    /// A standard I/O error (file open, read, write, …).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The system clipboard rejected the request.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl TextboxError {
    /// Wrap `self` as a read failure for `key`.
    #[cfg_attr(not(test), allow(dead_code))] // reads from both shipped stores are infallible
    pub(crate) fn reading(self, key: &str) -> Self {
        Self::StoreRead {
            key: key.to_owned(),
            source: Box::new(self),
        }
    }

    /// Wrap `self` as a write failure for `key`.
    pub(crate) fn writing(self, key: &str) -> Self {
        Self::StoreWrite {
            key: key.to_owned(),
            source: Box::new(self),
        }
    }
}

impl From<arboard::Error> for TextboxError {
    fn from(e: arboard::Error) -> Self {
        Self::Clipboard(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TextboxError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
