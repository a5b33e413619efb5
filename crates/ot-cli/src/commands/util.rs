//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

/// Formats a day as "Wednesday, Jan 29, 2025".
pub fn format_day(date: NaiveDate) -> String {
    date.format("%A, %b %-d, %Y").to_string()
}

/// Reads the whole raw log. A path of `-` reads stdin.
pub fn read_log(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read log from stdin")?;
        return Ok(contents);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
