//! Days command: show which days a run tracks and how far back it scans.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ot_core::TrackingEngine;
use serde::Serialize;

use crate::Config;
use crate::commands::util::format_day;

/// The calendar of a run, without scanning any log.
#[derive(Debug, Serialize)]
pub struct DaysData {
    pub today: NaiveDate,
    pub cutoff: NaiveDate,
    pub tracked_days: Vec<NaiveDate>,
}

/// Resolves tracked days and cutoff the same way a tracking run does.
pub fn generate_days(config: &Config, today: NaiveDate) -> Result<DaysData> {
    let schedule = config.schedule().context("invalid slot definitions")?;
    let engine = TrackingEngine::new(&config.tracker, schedule, today)
        .context("invalid tracking configuration")?;

    Ok(DaysData {
        today,
        cutoff: engine.cutoff(),
        tracked_days: engine.tracked_days().as_slice().to_vec(),
    })
}

pub fn format_days(data: &DaysData) -> String {
    let mut output = String::new();

    writeln!(output, "Today:   {}", format_day(data.today)).unwrap();
    writeln!(output, "Cutoff:  {}", format_day(data.cutoff)).unwrap();
    writeln!(output, "Tracked days:").unwrap();
    for (index, date) in data.tracked_days.iter().enumerate() {
        writeln!(output, "  {}. {}", index + 1, format_day(*date)).unwrap();
    }

    output
}

/// Runs the days command.
pub fn run<W: Write>(writer: &mut W, config: &Config, today: NaiveDate, json: bool) -> Result<()> {
    let data = generate_days(config, today)?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&data)?)?;
    } else {
        write!(writer, "{}", format_days(&data))?;
    }

    Ok(())
}
