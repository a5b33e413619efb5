//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Appointment occupancy tracker.
///
/// Counts how many appointments in the target language are booked into
/// each availability slot over the next business days.
#[derive(Debug, Parser)]
#[command(name = "ot", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count appointments per tracked day and slot.
    Track {
        /// Raw log file, one `serial#language#interval` record per line.
        /// Use `-` to read from stdin.
        log: PathBuf,

        /// Date to treat as today (YYYY-MM-DD). Defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the tracked days and the scan cutoff.
    Days {
        /// Date to treat as today (YYYY-MM-DD). Defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
