// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waymark: log workouts at map locations and keep them across sessions.
//!
//! The core is the workout domain model ([`models::Workout`]) and the
//! [`store::WorkoutStore`] that owns the collection and its persistence.
//! Everything in front of it (map, form, terminal) is a thin I/O layer.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
