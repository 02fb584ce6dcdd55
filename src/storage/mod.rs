//! Storage layer (key-value persistence).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Storage keys as constants.
pub mod keys {
    /// The whole workout collection, as one JSON array.
    pub const WORKOUTS: &str = "workouts";
}

/// Key-value persistence consumed by the store.
///
/// Blobs are opaque strings; a failure is fatal for that one operation only
/// and is never retried.
pub trait KeyValueStorage {
    /// Read the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `blob` under `key`, replacing any previous value.
    fn set(&self, key: &str, blob: &str) -> Result<()>;

    /// Delete the entry under `key`. Deleting an absent key is fine.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        (**self).set(key, blob)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
