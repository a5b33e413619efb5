//! Occupancy tracker CLI library.
//!
//! This crate provides the CLI interface for the occupancy tracker: it
//! loads configuration, reads the raw log and renders the grid.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
