// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed key-value storage.
//!
//! Each key maps to one `<key>.json` file under the configured data
//! directory. Writes replace the whole file, matching the one-blob-per-key
//! contract of [`KeyValueStorage`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::storage::KeyValueStorage;

/// Key-value storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to read {}: {err}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            AppError::Storage(format!("Failed to create {}: {err}", self.dir.display()))
        })?;

        let path = self.entry_path(key);
        fs::write(&path, blob).map_err(|err| {
            AppError::Storage(format!("Failed to write {}: {err}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to remove {}: {err}",
                path.display()
            ))),
        }
    }
}
