//! Appointment tracking scan.
//!
//! Walks a reverse-chronological log once, counting every appointment
//! for a tracked day and the target language into its schedule slot.
//!
//! # Algorithm Summary
//!
//! 1. Tracked days are the next `lookahead_days` business days after today
//! 2. The cutoff is `lookback_days` business days before today
//! 3. Each line is classified; a sentinel error or a valid record dated on
//!    or before the cutoff ends the scan
//! 4. Valid records for a tracked day and an accepted language spelling are
//!    resolved to a slot and counted; everything else is skipped

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::TrackerError;
use crate::calendar;
use crate::record::{self, Appointment, Outcome};
use crate::schedule::{GridShape, Schedule};

/// Configuration for a tracking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How many upcoming business days are tracked.
    /// Default: 2 (the next two business days).
    pub lookahead_days: usize,

    /// How many business days back the scan may go before stopping.
    /// Default: 7.
    pub lookback_days: u32,

    /// Accepted spellings of the target language, matched exactly.
    pub language_aliases: Vec<String>,

    /// Slots configured for each tracked day.
    /// Default: 2.
    pub slots_per_day: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead_days: 2,
            lookback_days: 7,
            language_aliases: vec![
                "Engleza".to_string(),
                "English".to_string(),
                "Englsih".to_string(),
            ],
            slots_per_day: 2,
        }
    }
}

impl TrackerConfig {
    /// Grid shape the slot definitions must have.
    pub const fn grid_shape(&self) -> GridShape {
        GridShape {
            days: self.lookahead_days,
            slots: self.slots_per_day,
        }
    }
}

/// The days appointments are counted for, strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrackedDays(Vec<NaiveDate>);

impl TrackedDays {
    /// Validates caller-supplied days.
    pub fn new(days: Vec<NaiveDate>) -> Result<Self, TrackerError> {
        if let Some(pair) = days.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(TrackerError::UnorderedTrackedDays {
                previous: pair[0],
                date: pair[1],
            });
        }
        Ok(Self(days))
    }

    /// The `count` business days following `today`.
    pub fn upcoming(today: NaiveDate, count: usize) -> Result<Self, TrackerError> {
        let days = (1..=count)
            .map(|offset| {
                let offset = i64::try_from(offset).unwrap_or(i64::MAX);
                calendar::business_day_offset(today, offset)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(days))
    }

    /// Position of `date`, exact day match only.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.0.binary_search(&date).ok()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Accepted spellings of the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAliases(Vec<String>);

impl LanguageAliases {
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(aliases.into_iter().map(Into::into).collect())
    }

    /// Case-sensitive exact match against any alias.
    pub fn matches(&self, label: &str) -> bool {
        self.0.iter().any(|alias| alias == label)
    }
}

/// Why the scan stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ScanStop {
    /// The log ran out.
    #[default]
    EndOfLog,
    /// A sentinel error at this 0-based line index.
    Sentinel { line: usize },
    /// A record on or before the cutoff at this 0-based line index.
    Cutoff { line: usize },
}

/// Counters describing one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Lines examined, including the one that stopped the scan.
    pub lines_scanned: usize,
    /// Appointments counted into a slot.
    pub counted: usize,
    /// Lines without a usable date or fields.
    pub skipped_invalid: usize,
    /// Valid records for another day, another language, or no slot.
    pub skipped_unmatched: usize,
    pub stop: ScanStop,
}

/// Final state of a run, handed back to the host for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingResult {
    pub tracked_days: TrackedDays,
    pub cutoff: NaiveDate,
    pub schedule: Schedule,
    pub summary: ScanSummary,
}

/// Single-pass scanner filling a schedule from a raw log.
#[derive(Debug, Clone)]
pub struct TrackingEngine {
    schedule: Schedule,
    tracked_days: TrackedDays,
    aliases: LanguageAliases,
    cutoff: NaiveDate,
}

impl TrackingEngine {
    /// Sets up a run for `today` from configuration.
    pub fn new(
        config: &TrackerConfig,
        schedule: Schedule,
        today: NaiveDate,
    ) -> Result<Self, TrackerError> {
        let tracked_days = TrackedDays::upcoming(today, config.lookahead_days)?;
        let cutoff = calendar::business_day_offset(today, -i64::from(config.lookback_days))?;
        let aliases = LanguageAliases::new(config.language_aliases.iter().cloned());

        tracing::debug!(
            %today,
            %cutoff,
            tracked_days = ?tracked_days.as_slice(),
            "tracking run configured"
        );

        Self::with_days(schedule, tracked_days, aliases, cutoff)
    }

    /// Sets up a run from explicit days and cutoff.
    pub fn with_days(
        schedule: Schedule,
        tracked_days: TrackedDays,
        aliases: LanguageAliases,
        cutoff: NaiveDate,
    ) -> Result<Self, TrackerError> {
        if tracked_days.len() != schedule.day_count() {
            return Err(TrackerError::DayCountMismatch {
                tracked: tracked_days.len(),
                scheduled: schedule.day_count(),
            });
        }

        Ok(Self {
            schedule,
            tracked_days,
            aliases,
            cutoff,
        })
    }

    pub const fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub const fn tracked_days(&self) -> &TrackedDays {
        &self.tracked_days
    }

    /// Scans the log, newest entries first.
    ///
    /// Stops at the first sentinel error or the first valid record dated on
    /// or before the cutoff. Both are normal completions; the counts so far
    /// are final.
    pub fn run<I>(mut self, log: I) -> Result<TrackingResult, TrackerError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut summary = ScanSummary::default();

        for (line, raw) in log.into_iter().enumerate() {
            summary.lines_scanned += 1;

            let appointment = match record::classify(raw.as_ref()) {
                Outcome::SentinelError => {
                    summary.stop = ScanStop::Sentinel { line };
                    break;
                }
                Outcome::Invalid => {
                    tracing::trace!(line, "skipping invalid record");
                    summary.skipped_invalid += 1;
                    continue;
                }
                Outcome::Valid(appointment) => appointment,
            };

            if calendar::is_on_or_before(appointment.date, self.cutoff) {
                summary.stop = ScanStop::Cutoff { line };
                break;
            }

            if self.count(line, &appointment)? {
                summary.counted += 1;
            } else {
                summary.skipped_unmatched += 1;
            }
        }

        tracing::debug!(
            lines_scanned = summary.lines_scanned,
            counted = summary.counted,
            stop = ?summary.stop,
            "scan finished"
        );

        Ok(TrackingResult {
            tracked_days: self.tracked_days,
            cutoff: self.cutoff,
            schedule: self.schedule,
            summary,
        })
    }

    /// Counts one appointment. Returns whether it landed in a slot.
    fn count(&mut self, line: usize, appointment: &Appointment<'_>) -> Result<bool, TrackerError> {
        let Some(day) = self.tracked_days.index_of(appointment.date) else {
            tracing::trace!(line, date = %appointment.date, "skipping untracked day");
            return Ok(false);
        };

        if !self.aliases.matches(appointment.language) {
            tracing::trace!(line, language = appointment.language, "skipping other language");
            return Ok(false);
        }

        let Some(slot) = self.schedule.resolve(day, appointment.bounds().as_slice()) else {
            tracing::trace!(line, interval = appointment.interval, "no slot for interval");
            return Ok(false);
        };

        self.schedule.increment_at(day, slot)?;
        tracing::trace!(line, day, slot, "counted appointment");
        Ok(true)
    }
}

/// Runs a complete tracking pass for `today`.
pub fn track_appointments<I>(
    config: &TrackerConfig,
    schedule: Schedule,
    today: NaiveDate,
    log: I,
) -> Result<TrackingResult, TrackerError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TrackingEngine::new(config, schedule, today)?.run(log)
}
