// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store: the single source of truth for the workout collection.
//!
//! Handles the core workflow:
//! 1. Validate raw input from the form
//! 2. Build the typed workout record
//! 3. Append to the ordered collection
//! 4. Persist the whole collection
//!
//! On startup, `restore()` rebuilds the collection from storage; later UI
//! clicks resolve records through `find_by_id()`.

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{DraftDetails, StoredWorkout, Workout, WorkoutDraft};
use crate::storage::{keys, KeyValueStorage};

/// Owns the ordered workout collection and writes through to storage.
///
/// Insertion order is display order. The store lives for the whole process;
/// persistence is durable after every successful [`WorkoutStore::create`],
/// so there is no shutdown step.
pub struct WorkoutStore<S> {
    storage: S,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    /// Create an empty store on top of `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            workouts: Vec::new(),
        }
    }

    /// Validate a draft, append the new workout, and persist the whole
    /// collection.
    ///
    /// Fails with [`AppError::Validation`] when distance or duration is not
    /// a positive finite number (either variant), or cadence is not
    /// (running). Elevation gain is accepted unchecked. On any failure —
    /// validation or persistence — the collection and the persisted state
    /// are left exactly as they were.
    pub fn create(&mut self, draft: WorkoutDraft) -> Result<Workout> {
        validate(&draft)?;

        let workout = Workout::new(draft, Utc::now());
        self.workouts.push(workout.clone());

        if let Err(err) = self.persist() {
            self.workouts.pop();
            return Err(err);
        }

        tracing::debug!(id = %workout.id, kind = %workout.kind(), "Workout recorded");
        Ok(workout)
    }

    /// Resolve a workout by id. Linear scan, first match; `None` on a miss.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Mutable lookup so the UI can count an interaction on a selection.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|workout| workout.id == id)
    }

    /// The collection in insertion order, read-only.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Replace the collection with what storage holds; returns how many
    /// workouts were loaded.
    ///
    /// Restored workouts are rebuilt as fully typed records with their
    /// derived metrics recomputed. Absent or malformed data means no prior
    /// state: the store starts empty and nothing propagates.
    pub fn restore(&mut self) -> usize {
        self.workouts.clear();

        let blob = match self.storage.get(keys::WORKOUTS) {
            Ok(Some(blob)) => blob,
            Ok(None) => return 0,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read saved workouts; starting empty");
                return 0;
            }
        };

        let stored: Vec<StoredWorkout> = match serde_json::from_str(&blob) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "Saved workouts are not valid JSON; starting empty");
                return 0;
            }
        };

        let mut workouts = Vec::with_capacity(stored.len());
        for entry in stored {
            match Workout::from_stored(entry) {
                Ok(workout) => workouts.push(workout),
                Err(err) => {
                    tracing::warn!(error = %err, "Discarding saved workouts; starting empty");
                    return 0;
                }
            }
        }

        self.workouts = workouts;
        tracing::debug!(count = self.workouts.len(), "Restored saved workouts");
        self.workouts.len()
    }

    /// Empty the collection and erase the persisted state. Irreversible.
    pub fn clear(&mut self) -> Result<()> {
        self.workouts.clear();
        self.storage.remove(keys::WORKOUTS)?;
        tracing::info!("Cleared all workouts");
        Ok(())
    }

    /// Serialize the entire collection into one blob and write it through.
    fn persist(&self) -> Result<()> {
        let stored: Vec<StoredWorkout> = self.workouts.iter().map(StoredWorkout::from).collect();
        let blob = serde_json::to_string(&stored)
            .map_err(|err| AppError::Storage(format!("Failed to serialize workouts: {err}")))?;
        self.storage.set(keys::WORKOUTS, &blob)
    }
}

fn validate(draft: &WorkoutDraft) -> Result<()> {
    check_positive("distance", draft.distance_km)?;
    check_positive("duration", draft.duration_min)?;

    // Elevation gain may legitimately be zero or negative, so only running
    // has its extra field checked.
    if let DraftDetails::Running { cadence_spm } = draft.details {
        check_positive("cadence", cadence_spm)?;
    }

    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LatLng, WorkoutDetails, WorkoutKind};
    use crate::storage::MemoryStorage;

    fn run_draft() -> WorkoutDraft {
        WorkoutDraft::running(LatLng(10.0, 20.0), 5.0, 30.0, 150.0)
    }

    fn ride_draft() -> WorkoutDraft {
        WorkoutDraft::cycling(LatLng(10.0, 20.0), 20.0, 60.0, -5.0)
    }

    #[test]
    fn test_create_appends_in_insertion_order() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);

        let run = store.create(run_draft()).unwrap();
        let ride = store.create(ride_draft()).unwrap();

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], run);
        assert_eq!(all[1], ride);
    }

    #[test]
    fn test_create_persists_the_whole_collection_each_time() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);

        store.create(run_draft()).unwrap();
        let blob = storage.get(keys::WORKOUTS).unwrap().unwrap();
        let stored: Vec<StoredWorkout> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored.len(), 1);

        store.create(ride_draft()).unwrap();
        let blob = storage.get(keys::WORKOUTS).unwrap().unwrap();
        let stored: Vec<StoredWorkout> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].variant, WorkoutKind::Running);
        assert_eq!(stored[1].variant, WorkoutKind::Cycling);
    }

    #[test]
    fn test_negative_distance_fails_and_leaves_state_untouched() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        store.create(run_draft()).unwrap();
        let blob_before = storage.get(keys::WORKOUTS).unwrap();

        let draft = WorkoutDraft::cycling(LatLng(1.0, 2.0), -1.0, 60.0, 100.0);
        let err = store.create(draft).unwrap_err();

        assert_eq!(
            err,
            AppError::Validation {
                field: "distance",
                value: -1.0
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(storage.get(keys::WORKOUTS).unwrap(), blob_before);
    }

    #[test]
    fn test_non_finite_inputs_fail_validation() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);

        let draft = WorkoutDraft::running(LatLng(1.0, 2.0), f64::NAN, 30.0, 150.0);
        assert!(store.create(draft).unwrap_err().is_validation());

        let draft = WorkoutDraft::running(LatLng(1.0, 2.0), 5.0, f64::INFINITY, 150.0);
        assert!(store.create(draft).unwrap_err().is_validation());

        assert!(store.is_empty());
    }

    #[test]
    fn test_running_cadence_is_checked_but_elevation_gain_is_not() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);

        let draft = WorkoutDraft::running(LatLng(1.0, 2.0), 5.0, 30.0, 0.0);
        assert_eq!(
            store.create(draft).unwrap_err(),
            AppError::Validation {
                field: "cadence",
                value: 0.0
            }
        );

        // A downhill-only ride is fine.
        let ride = store.create(ride_draft()).unwrap();
        match ride.details {
            WorkoutDetails::Cycling { speed_kmh, .. } => assert_eq!(speed_kmh, 20.0),
            WorkoutDetails::Running { .. } => panic!("expected a cycling workout"),
        }
    }

    #[test]
    fn test_find_by_id_on_empty_store_is_none() {
        let storage = MemoryStorage::new();
        let store = WorkoutStore::new(&storage);
        assert!(store.find_by_id("1234567890").is_none());
    }

    #[test]
    fn test_find_by_id_hit_and_miss() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        let run = store.create(run_draft()).unwrap();

        assert_eq!(store.find_by_id(&run.id), Some(&run));
        assert!(store.find_by_id("not-an-id").is_none());
    }

    #[test]
    fn test_restore_rebuilds_fully_typed_workouts() {
        let storage = MemoryStorage::new();
        let (run, ride) = {
            let mut store = WorkoutStore::new(&storage);
            let run = store.create(run_draft()).unwrap();
            let ride = store.create(ride_draft()).unwrap();
            (run, ride)
        };

        let mut reloaded = WorkoutStore::new(&storage);
        assert_eq!(reloaded.restore(), 2);

        let all = reloaded.all();
        assert_eq!(all[0], run);
        assert_eq!(all[1], ride);

        // The variant payload survives the round trip with its derived
        // metric recomputed, not as plain data.
        match all[0].details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => assert_eq!(pace_min_per_km, 6.0),
            WorkoutDetails::Cycling { .. } => panic!("expected a running workout"),
        }
    }

    #[test]
    fn test_restore_with_no_saved_state_is_empty() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        assert_eq!(store.restore(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_with_malformed_blob_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set(keys::WORKOUTS, "not json at all").unwrap();

        let mut store = WorkoutStore::new(&storage);
        assert_eq!(store.restore(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_discards_everything_on_one_bad_record() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        store.create(run_draft()).unwrap();

        // Strip the cadence from the persisted record.
        let blob = storage.get(keys::WORKOUTS).unwrap().unwrap();
        let mut stored: Vec<serde_json::Value> = serde_json::from_str(&blob).unwrap();
        stored[0].as_object_mut().unwrap().remove("cadenceSpm");
        storage
            .set(keys::WORKOUTS, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let mut reloaded = WorkoutStore::new(&storage);
        assert_eq!(reloaded.restore(), 0);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_clear_then_restore_is_empty() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        store.create(run_draft()).unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(storage.get(keys::WORKOUTS).unwrap(), None);

        let mut reloaded = WorkoutStore::new(&storage);
        assert_eq!(reloaded.restore(), 0);
    }

    #[test]
    fn test_interaction_counts_are_durable_as_of_the_next_create() {
        let storage = MemoryStorage::new();
        let mut store = WorkoutStore::new(&storage);
        let run = store.create(run_draft()).unwrap();

        store.find_by_id_mut(&run.id).unwrap().record_interaction();

        // Not persisted yet: a reload still sees zero.
        let mut reloaded = WorkoutStore::new(&storage);
        reloaded.restore();
        assert_eq!(reloaded.find_by_id(&run.id).unwrap().interaction_count, 0);

        // The next create writes the whole collection, counter included.
        store.create(ride_draft()).unwrap();
        let mut reloaded = WorkoutStore::new(&storage);
        reloaded.restore();
        assert_eq!(reloaded.find_by_id(&run.id).unwrap().interaction_count, 1);
    }
}
