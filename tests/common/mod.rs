// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests.

use tempfile::TempDir;
use waymark::models::{LatLng, WorkoutDraft};
use waymark::storage::FileStorage;
use waymark::store::WorkoutStore;

/// A store backed by its own throwaway data directory.
///
/// Keeps the `TempDir` alive for the duration of the test and hands out a
/// second `FileStorage` handle so tests can inspect the files directly.
pub struct TestStore {
    pub store: WorkoutStore<FileStorage>,
    pub storage: FileStorage,
    _dir: TempDir,
}

#[allow(dead_code)]
pub fn test_store() -> TestStore {
    let dir = TempDir::new().expect("Failed to create tempdir");
    let storage = FileStorage::new(dir.path());
    TestStore {
        store: WorkoutStore::new(storage.clone()),
        storage,
        _dir: dir,
    }
}

/// Reopen a fresh store over the same data directory, as a new process
/// launch would.
#[allow(dead_code)]
pub fn reopen(test_store: &TestStore) -> WorkoutStore<FileStorage> {
    let mut store = WorkoutStore::new(test_store.storage.clone());
    store.restore();
    store
}

#[allow(dead_code)]
pub fn run_draft() -> WorkoutDraft {
    WorkoutDraft::running(LatLng(10.0, 20.0), 5.0, 30.0, 150.0)
}

#[allow(dead_code)]
pub fn ride_draft() -> WorkoutDraft {
    WorkoutDraft::cycling(LatLng(10.0, 20.0), 20.0, 60.0, -5.0)
}
