//! Track command: scan a raw log and report slot occupancy.
//!
//! Renders the final schedule one block per tracked day, followed by a
//! summary of how the scan went. `--json` emits the same data as JSON.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ot_core::{ScanStop, ScanSummary, Slot, TrackingEngine, TrackingResult};
use serde::Serialize;

use crate::Config;
use crate::commands::util::{format_day, read_log};

/// Computed report data.
#[derive(Debug)]
pub struct TrackReport {
    pub today: NaiveDate,
    /// Log lines skipped before the scan, used to report file line numbers.
    pub header_rows: usize,
    pub result: TrackingResult,
}

/// Runs the engine over the log contents.
pub fn generate_report(config: &Config, log: &str, today: NaiveDate) -> Result<TrackReport> {
    let schedule = config.schedule().context("invalid slot definitions")?;
    let engine = TrackingEngine::new(&config.tracker, schedule, today)
        .context("invalid tracking configuration")?;

    let result = engine
        .run(log.lines().skip(config.header_rows))
        .context("tracking run failed")?;

    Ok(TrackReport {
        today,
        header_rows: config.header_rows,
        result,
    })
}

/// Describes why the scan stopped, with 1-based file line numbers.
fn describe_stop(stop: ScanStop, header_rows: usize) -> String {
    match stop {
        ScanStop::EndOfLog => "end of log".to_string(),
        ScanStop::Sentinel { line } => {
            format!("upstream error at line {}", line + header_rows + 1)
        }
        ScanStop::Cutoff { line } => {
            format!("cutoff reached at line {}", line + header_rows + 1)
        }
    }
}

/// Formats the human-readable report output.
pub fn format_report(report: &TrackReport) -> String {
    let mut output = String::new();
    let result = &report.result;

    writeln!(output, "OCCUPANCY REPORT: {}", format_day(report.today)).unwrap();
    writeln!(output, "Scanning back to: {}", format_day(result.cutoff)).unwrap();

    for (day, date) in result.tracked_days.as_slice().iter().enumerate() {
        writeln!(output).unwrap();
        writeln!(output, "{}", format_day(*date)).unwrap();
        for slot in result.schedule.slots(day).unwrap_or_default() {
            writeln!(output, "  {:<14}{:>3}", slot.interval(), slot.count()).unwrap();
        }
    }

    let summary = &result.summary;
    writeln!(output).unwrap();
    writeln!(output, "SCAN").unwrap();
    writeln!(output, "────").unwrap();
    writeln!(output, "Lines scanned:  {}", summary.lines_scanned).unwrap();
    writeln!(output, "Counted:        {}", summary.counted).unwrap();
    writeln!(output, "Invalid:        {}", summary.skipped_invalid).unwrap();
    writeln!(output, "Unmatched:      {}", summary.skipped_unmatched).unwrap();
    writeln!(
        output,
        "Stopped:        {}",
        describe_stop(summary.stop, report.header_rows)
    )
    .unwrap();

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub today: NaiveDate,
    pub cutoff: NaiveDate,
    pub days: Vec<JsonDay<'a>>,
    pub scan: &'a ScanSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonDay<'a> {
    pub date: NaiveDate,
    pub slots: &'a [Slot],
}

/// Formats report data as JSON.
pub fn format_report_json(report: &TrackReport) -> Result<String> {
    let result = &report.result;
    let days = result
        .tracked_days
        .as_slice()
        .iter()
        .enumerate()
        .map(|(day, date)| JsonDay {
            date: *date,
            slots: result.schedule.slots(day).unwrap_or_default(),
        })
        .collect();

    let json = JsonReport {
        today: report.today,
        cutoff: result.cutoff,
        days,
        scan: &result.summary,
    };

    Ok(serde_json::to_string_pretty(&json)?)
}

/// Runs the track command.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    log_path: &Path,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let log = read_log(log_path)?;
    let report = generate_report(config, &log, today)?;

    if json {
        writeln!(writer, "{}", format_report_json(&report)?)?;
    } else {
        write!(writer, "{}", format_report(&report))?;
    }

    Ok(())
}
