// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waymark CLI
//!
//! Logs workouts at map locations, renders them as a list, and keeps them
//! across runs in a local data directory. All state lives in the
//! [`WorkoutStore`]; this binary only parses input and prints.

use anyhow::Context;
use chrono::SecondsFormat;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use waymark::cli::{Cli, Cmd};
use waymark::config::Config;
use waymark::models::{LatLng, Workout, WorkoutDetails, WorkoutDraft, WorkoutKind};
use waymark::storage::FileStorage;
use waymark::store::WorkoutStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config::from_env();
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "Opening workout store");

    let mut store = WorkoutStore::new(FileStorage::new(data_dir));
    store.restore();

    match cli.cmd {
        Cmd::Run {
            lat,
            lng,
            distance,
            duration,
            cadence,
        } => log_workout(
            &mut store,
            WorkoutDraft::running(LatLng(lat, lng), distance, duration, cadence),
        ),

        Cmd::Ride {
            lat,
            lng,
            distance,
            duration,
            elevation,
        } => log_workout(
            &mut store,
            WorkoutDraft::cycling(LatLng(lat, lng), distance, duration, elevation),
        ),

        Cmd::List => {
            if store.is_empty() {
                println!("No workouts logged yet.");
            } else {
                for workout in store.all() {
                    println!("{}", summary_line(workout));
                }
            }
            Ok(())
        }

        Cmd::Show { id } => {
            let Some(workout) = store.find_by_id_mut(&id) else {
                println!("No workout with id {id}.");
                return Ok(());
            };
            workout.record_interaction();
            let workout = workout.clone();

            println!("{}", summary_line(&workout));
            println!(
                "  location: {:.5}, {:.5}",
                workout.location.lat(),
                workout.location.lng()
            );
            println!(
                "  logged:   {}",
                workout.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
            println!("  viewed:   {} time(s)", workout.interaction_count);
            Ok(())
        }

        Cmd::Reset => {
            store.clear().context("Failed to reset the workout store")?;
            println!("All workouts deleted.");
            Ok(())
        }
    }
}

/// Create a workout and print its list line, or surface the validation
/// message. Validation failures are user errors, not crashes.
fn log_workout(store: &mut WorkoutStore<FileStorage>, draft: WorkoutDraft) -> anyhow::Result<()> {
    match store.create(draft) {
        Ok(workout) => {
            println!("{}", summary_line(&workout));
            Ok(())
        }
        Err(err) if err.is_validation() => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => Err(err).context("Failed to save the workout"),
    }
}

fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃",
        WorkoutKind::Cycling => "🚴",
    }
}

/// One list line per workout, derived metric to one decimal place.
fn summary_line(workout: &Workout) -> String {
    let metrics = match workout.details {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => format!("{pace_min_per_km:.1} min/km · {cadence_spm} spm"),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_kmh,
        } => format!("{speed_kmh:.1} km/h · {elevation_gain_m} m"),
    };

    format!(
        "{} {}  {} km · {} min · {}  (id {})",
        kind_icon(workout.kind()),
        workout.label,
        workout.distance_km,
        workout.duration_min,
        metrics,
        workout.id
    )
}

/// Initialize logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
fn init_logging(verbose: u8, quiet: u8) {
    let net = verbose as i8 - quiet as i8;
    let level = match net {
        i8::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i8::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,waymark={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
