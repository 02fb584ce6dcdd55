// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model: one logged activity with its derived metric.
//!
//! A [`Workout`] carries the payload shared by every activity plus a
//! [`WorkoutDetails`] variant payload (running or cycling). Derived metrics
//! are computed once at construction as pure functions of distance and
//! duration. [`StoredWorkout`] is the plain persisted form.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The kind of activity, determining which extra field and derived metric
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized form used in labels.
    pub fn title(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        };
        f.write_str(s)
    }
}

/// A map location as `(latitude, longitude)`, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lng(self) -> f64 {
        self.1
    }
}

/// Variant-specific payload, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running {
        /// Cadence in steps per minute
        cadence_spm: f64,
        /// Pace in min/km, derived from duration and distance
        pace_min_per_km: f64,
    },
    Cycling {
        /// Elevation gain in meters (may be zero or negative)
        elevation_gain_m: f64,
        /// Speed in km/h, derived from distance and duration
        speed_kmh: f64,
    },
}

/// Variant-specific raw input for a [`WorkoutDraft`].
#[derive(Debug, Clone, Copy)]
pub enum DraftDetails {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

/// Raw input for one workout, as collected by the UI.
///
/// The map collaborator resolves `location`; the numeric fields come
/// straight from the form. The store validates a draft before it ever
/// becomes a [`Workout`].
#[derive(Debug, Clone, Copy)]
pub struct WorkoutDraft {
    /// Where the workout happened
    pub location: LatLng,
    /// Distance in km
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Cadence (running) or elevation gain (cycling)
    pub details: DraftDetails,
}

impl WorkoutDraft {
    pub fn running(location: LatLng, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            location,
            distance_km,
            duration_min,
            details: DraftDetails::Running { cadence_spm },
        }
    }

    pub fn cycling(
        location: LatLng,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            location,
            distance_km,
            duration_min,
            details: DraftDetails::Cycling { elevation_gain_m },
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            DraftDetails::Running { .. } => WorkoutKind::Running,
            DraftDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// One logged activity. Immutable after construction except for the
/// interaction counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Identifier derived from the creation timestamp (see [`Workout::new`])
    pub id: String,
    /// When the workout was logged
    pub created_at: DateTime<Utc>,
    /// Where the workout happened
    pub location: LatLng,
    /// Distance in km
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Human-readable label, e.g. "Running on April 14"
    pub label: String,
    /// How often this workout was selected in the UI
    pub interaction_count: u32,
    /// Variant payload with the derived metric
    pub details: WorkoutDetails,
}

/// Pace in min/km.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Speed in km/h.
pub fn speed_kmh(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

impl Workout {
    /// Build a workout from an already-validated draft.
    ///
    /// Computes the variant's derived metric and the label, and derives the
    /// id from the last 10 decimal digits of `created_at` in epoch
    /// milliseconds. Two workouts created within the same millisecond share
    /// an id; for a single local user this is accepted rather than worked
    /// around.
    ///
    /// Callers must have validated the draft first (the store does); this
    /// constructor checks nothing.
    pub fn new(draft: WorkoutDraft, created_at: DateTime<Utc>) -> Self {
        let details = match draft.details {
            DraftDetails::Running { cadence_spm } => WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: pace_min_per_km(draft.distance_km, draft.duration_min),
            },
            DraftDetails::Cycling { elevation_gain_m } => WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_kmh: speed_kmh(draft.distance_km, draft.duration_min),
            },
        };

        Self {
            id: timestamp_id(created_at),
            created_at,
            location: draft.location,
            distance_km: draft.distance_km,
            duration_min: draft.duration_min,
            label: label_for(draft.kind(), created_at),
            interaction_count: 0,
            details,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Count a UI selection. The only mutation a workout ever undergoes.
    pub fn record_interaction(&mut self) {
        self.interaction_count += 1;
    }

    /// Rebuild a fully typed workout from its persisted form.
    ///
    /// The variant payload is reconstructed and the derived metric
    /// recomputed from the persisted distance and duration, so restored
    /// workouts behave exactly like freshly created ones.
    pub fn from_stored(stored: StoredWorkout) -> Result<Self, AppError> {
        let details = match stored.variant {
            WorkoutKind::Running => {
                let cadence_spm = stored.cadence_spm.ok_or_else(|| {
                    AppError::Malformed(format!("running workout {} has no cadence", stored.id))
                })?;
                WorkoutDetails::Running {
                    cadence_spm,
                    pace_min_per_km: pace_min_per_km(stored.distance_km, stored.duration_min),
                }
            }
            WorkoutKind::Cycling => {
                let elevation_gain_m = stored.elevation_gain_m.ok_or_else(|| {
                    AppError::Malformed(format!(
                        "cycling workout {} has no elevation gain",
                        stored.id
                    ))
                })?;
                WorkoutDetails::Cycling {
                    elevation_gain_m,
                    speed_kmh: speed_kmh(stored.distance_km, stored.duration_min),
                }
            }
        };

        Ok(Self {
            id: stored.id,
            created_at: stored.created_at,
            location: stored.location,
            distance_km: stored.distance_km,
            duration_min: stored.duration_min,
            label: stored.label,
            interaction_count: stored.interaction_count,
            details,
        })
    }
}

/// Persisted form of a workout: one flat JSON object per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    pub id: String,
    /// RFC 3339 timestamp
    pub created_at: DateTime<Utc>,
    pub variant: WorkoutKind,
    /// `[lat, lng]`
    pub location: LatLng,
    pub distance_km: f64,
    pub duration_min: f64,
    pub label: String,
    #[serde(default)]
    pub interaction_count: u32,
    /// Present for running workouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    /// Present for cycling workouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(workout: &Workout) -> Self {
        let (cadence_spm, elevation_gain_m) = match workout.details {
            WorkoutDetails::Running { cadence_spm, .. } => (Some(cadence_spm), None),
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => (None, Some(elevation_gain_m)),
        };

        Self {
            id: workout.id.clone(),
            created_at: workout.created_at,
            variant: workout.kind(),
            location: workout.location,
            distance_km: workout.distance_km,
            duration_min: workout.duration_min,
            label: workout.label.clone(),
            interaction_count: workout.interaction_count,
            cadence_spm,
            elevation_gain_m,
        }
    }
}

/// Last 10 decimal digits of the timestamp in epoch milliseconds.
fn timestamp_id(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

/// `"<Capitalized kind> on <Month name> <day>"`, day without leading zero.
fn label_for(kind: WorkoutKind, date: DateTime<Utc>) -> String {
    format!(
        "{} on {} {}",
        kind.title(),
        MONTH_NAMES[date.month0() as usize],
        date.day()
    )
}
