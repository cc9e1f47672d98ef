// ── JSON file store ───────────────────────────────────────────────────────────
//
// Reads and writes `<data-dir>/store.json`.
// No `unsafe` — pure safe Rust + serde_json.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::error::{Result, TextboxError};

// ── On-disk types ─────────────────────────────────────────────────────────────

/// Root of the JSON store file.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

// ── Format version ────────────────────────────────────────────────────────────

const STORE_VERSION: u32 = 1;

/// File name of the store inside the data directory.
pub(crate) const STORE_FILE_NAME: &str = "store.json";

// ── Store ─────────────────────────────────────────────────────────────────────

/// A key-value store persisted as a single pretty-printed JSON file.
///
/// Every entry is held in memory; `set` rewrites the whole file so that the
/// on-disk copy is current after each call.
#[derive(Debug)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store in `dir`, reading `store.json` if it exists.
    ///
    /// A missing, unreadable or unparsable file, or one with an unrecognised
    /// version, yields an empty store.  The file is not touched until the
    /// first `set`.
    pub(crate) fn open(dir: &Path) -> Self {
        let path = dir.join(STORE_FILE_NAME);
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable store file");
                BTreeMap::new()
            }
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "store opened");
        Self { path, entries }
    }

    /// Path of the backing file.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Serialise every entry to the backing file, creating its directory.
    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let sf = StoreFile {
            version: STORE_VERSION,
            entries: self.entries.clone(),
        };
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &sf)?;
        Ok(())
    }
}

/// Read the entry map from `path`.  A missing file is an empty map.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };
    let sf: StoreFile = serde_json::from_slice(&data)?;
    if sf.version != STORE_VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("unsupported store version {}", sf.version),
        )
        .into());
    }
    Ok(sf.entries)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush().map_err(|e: TextboxError| e.writing(key))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load, save, CHAR_INPUT_KEY, MSG_INPUT_KEY};

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path());
        assert_eq!(store.get(CHAR_INPUT_KEY).expect("get"), None);
        assert!(!store.path().exists(), "open must not create the file");
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let mut store = JsonFileStore::open(dir.path());
            save(&mut store, CHAR_INPUT_KEY, "persisted text");
            save(&mut store, MSG_INPUT_KEY, "short note");
        }
        let store = JsonFileStore::open(dir.path());
        assert_eq!(load(&store, CHAR_INPUT_KEY), "persisted text");
        assert_eq!(load(&store, MSG_INPUT_KEY), "short note");
    }

    #[test]
    fn set_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let mut store = JsonFileStore::open(&nested);
        store.set(CHAR_INPUT_KEY, "x").expect("set");
        assert!(nested.join(STORE_FILE_NAME).exists());
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(STORE_FILE_NAME), b"{ not json").expect("write");
        let store = JsonFileStore::open(dir.path());
        assert_eq!(load(&store, CHAR_INPUT_KEY), "");
    }

    #[test]
    fn wrong_version_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let json = r#"{"version":99,"entries":{"charInputText":"old"}}"#;
        fs::write(dir.path().join(STORE_FILE_NAME), json).expect("write");
        let store = JsonFileStore::open(dir.path());
        assert_eq!(load(&store, CHAR_INPUT_KEY), "");
    }

    #[test]
    fn entries_default_to_empty_when_absent() {
        let sf: StoreFile = serde_json::from_str(r#"{"version":1}"#).expect("deserialize");
        assert!(sf.entries.is_empty());
    }

    #[test]
    fn unwritable_path_reports_store_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A regular file where the data directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").expect("write");
        let mut store = JsonFileStore::open(&blocker);
        let err = store.set(CHAR_INPUT_KEY, "x").expect_err("set must fail");
        assert!(matches!(err, TextboxError::StoreWrite { ref key, .. } if key == CHAR_INPUT_KEY));
        // The in-memory copy still reflects the latest write.
        assert_eq!(store.get(CHAR_INPUT_KEY).expect("get").as_deref(), Some("x"));
    }
}
