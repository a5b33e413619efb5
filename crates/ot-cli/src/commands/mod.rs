//! CLI subcommand implementations.

pub mod days;
pub mod track;
pub mod util;
