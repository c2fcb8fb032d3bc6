//! Durable key-value ledger — namespaced JSON storage for client state.
//!
//! DESIGN
//! ======
//! One namespace = one JSON object file on disk mapping string keys to JSON
//! values. Every read loads the file fresh and every write rewrites it
//! through a temp file + rename, so a failed write is observed as "state
//! unchanged on next read" rather than a torn record.
//!
//! ERROR HANDLING
//! ==============
//! Callers never see storage faults: an unreadable or malformed payload
//! reads as absent, and a failed write is logged and dropped. Every
//! consumer treats ledger calls as best-effort.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

const DEFAULT_DATA_DIR: &str = "./samflix-data";

/// Resolve the ledger data directory from `SAMFLIX_DATA_DIR`.
#[must_use]
pub fn data_dir_from_env() -> PathBuf {
    std::env::var("SAMFLIX_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

/// Internal storage faults. Collapsed to absent / no-op at every public
/// method on [`Ledger`]; a missing key is not a fault.
#[derive(Debug, thiserror::Error)]
enum LedgerError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),
    #[error("malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Namespaced durable string-keyed store with JSON-serializable values.
pub struct Ledger {
    file: PathBuf,
}

impl Ledger {
    /// Open the ledger for `namespace` under `dir`.
    ///
    /// No I/O happens here. The namespace file is created lazily on the
    /// first successful write; an absent file reads as an empty ledger.
    #[must_use]
    pub fn open(dir: &Path, namespace: &str) -> Self {
        Self { file: dir.join(format!("{namespace}.json")) }
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` when the key is missing or the stored payload does
    /// not deserialize as `T`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load_lenient().remove(key)?;
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(key, error = %e, "malformed ledger record read as absent");
                None
            }
        }
    }

    /// Serialize and durably write `value` under `key`.
    ///
    /// Best-effort: if the underlying storage cannot be written the change
    /// is dropped and the previous state survives.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_value(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, error = %e, "unserializable ledger value dropped");
                return;
            }
        };
        let mut map = self.load_lenient();
        map.insert(key.to_owned(), payload);
        self.persist_lenient(&map);
    }

    /// Remove the value under `key`. Removing a missing key is a no-op.
    pub fn remove(&self, key: &str) {
        let mut map = self.load_lenient();
        if map.remove(key).is_none() {
            return;
        }
        self.persist_lenient(&map);
    }

    /// Remove every key in this ledger's namespace.
    pub fn clear(&self) {
        match fs::remove_file(&self.file) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(file = %self.file.display(), error = %e, "ledger clear failed"),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, Value>, LedgerError> {
        let raw = match fs::read_to_string(&self.file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn load_lenient(&self) -> BTreeMap<String, Value> {
        self.load().unwrap_or_else(|e| {
            warn!(file = %self.file.display(), error = %e, "ledger read failed; namespace treated as empty");
            BTreeMap::new()
        })
    }

    fn persist(&self, map: &BTreeMap<String, Value>) -> Result<(), LedgerError> {
        if let Some(dir) = self.file.parent() {
            fs::create_dir_all(dir)?;
        }
        let payload = serde_json::to_string(map)?;

        // Write-then-rename so a crash mid-write never leaves a torn file.
        let suffix: u32 = rand::rng().random();
        let tmp = self.file.with_extension(format!("json.{suffix:08x}.tmp"));
        fs::write(&tmp, payload)?;
        if let Err(e) = fs::rename(&tmp, &self.file) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn persist_lenient(&self, map: &BTreeMap<String, Value>) {
        if let Err(e) = self.persist(map) {
            warn!(file = %self.file.display(), error = %e, "ledger write failed; change dropped");
        }
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
