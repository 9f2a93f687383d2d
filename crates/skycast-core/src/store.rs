//! String-keyed local persistence slots.
//!
//! Mirrors the browser-local-storage model the dashboard state relies on:
//! each slot is one file under the store directory, writes are synchronous
//! and last-write-wins, and a read that fails for any reason behaves as if
//! the slot were empty. There is no cross-slot transaction; every slot has
//! an independent lifecycle.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store at the default per-user location.
    pub fn open_default() -> Self {
        let root = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast")
            .join("store");
        Self::new(root)
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Read the raw contents of a slot. Any failure reads as an empty slot.
    pub fn get(&self, slot: &str) -> Option<String> {
        match fs::read_to_string(self.root.join(slot)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read slot '{}': {}", slot, e);
                None
            }
        }
    }

    /// Write the raw contents of a slot, creating the store directory if needed.
    pub fn set(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Write {
            slot: slot.to_string(),
            source,
        })?;
        fs::write(self.root.join(slot), contents).map_err(|source| StorageError::Write {
            slot: slot.to_string(),
            source,
        })
    }

    /// Read and deserialize a JSON slot. Malformed contents are logged and
    /// treated as absent; this method never fails.
    pub fn get_json<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let contents = self.get(slot)?;
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed JSON in slot '{}', using defaults: {}", slot, e);
                None
            }
        }
    }

    /// Serialize and write a JSON slot.
    pub fn set_json<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        let contents = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            slot: slot.to_string(),
            source,
        })?;
        self.set(slot, &contents)
    }
}
