//! Command-line interface definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "waymark",
    about = "Log workouts at map locations and browse them from the terminal"
)]
pub struct Cli {
    /// Directory the workout data lives in. Overrides WAYMARK_DATA_DIR.
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Log a run at a map location.
    Run {
        /// Latitude of the spot marked on the map
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude of the spot marked on the map
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Distance in km
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,
        /// Cadence in steps per minute
        #[arg(long, allow_negative_numbers = true)]
        cadence: f64,
    },

    /// Log a ride at a map location.
    Ride {
        /// Latitude of the spot marked on the map
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude of the spot marked on the map
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Distance in km
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,
        /// Elevation gain in meters (zero or negative is fine)
        #[arg(long, allow_negative_numbers = true)]
        elevation: f64,
    },

    /// List all workouts in the order they were logged.
    List,

    /// Show one workout in full. Counts as a selection.
    Show {
        /// Workout id, as printed by `list`
        id: String,
    },

    /// Delete every workout and its saved state. Irreversible.
    Reset,
}
