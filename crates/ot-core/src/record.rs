//! Raw log records.
//!
//! Each log line is `serial#language#interval`, where `serial` is a
//! spreadsheet date serial and `interval` is `"HH:MM-HH:MM"` or `"HH:MM"`.
//! When the upstream sheet cannot resolve a row it renders an error value
//! such as `#ERROR!`, which splits into exactly two fields.

use chrono::NaiveDate;

use crate::calendar;
use crate::time::{leading_int, split_interval};

/// Separator between the fields of a raw record.
pub const FIELD_DELIMITER: char = '#';

/// Classification of one raw log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The upstream source reported an error instead of data.
    /// Nothing after this line is usable.
    SentinelError,
    /// The line has no usable date.
    Invalid,
    /// A well-formed appointment.
    Valid(Appointment<'a>),
}

/// A scheduled appointment parsed from a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment<'a> {
    /// Calendar day of the appointment.
    pub date: NaiveDate,
    /// Language label, verbatim.
    pub language: &'a str,
    /// Raw interval text, verbatim.
    pub interval: &'a str,
}

impl Appointment<'_> {
    /// Start bound first, then the end bound if there is one.
    pub fn bounds(&self) -> Vec<String> {
        split_interval(self.interval)
    }
}

/// Classifies a raw log line.
///
/// A two-field line is a sentinel error and is recognised before any
/// parsing. Otherwise the first field must start with an integer date
/// serial inside chrono's range. A missing language or interval field
/// reads as empty, so the record still carries its date for the cutoff
/// check but never matches an alias. Fields after the third are ignored.
pub fn classify(raw: &str) -> Outcome<'_> {
    let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    if fields.len() == 2 {
        return Outcome::SentinelError;
    }

    let Some(date) = leading_int(fields[0]).and_then(calendar::serial_to_date) else {
        return Outcome::Invalid;
    };

    Outcome::Valid(Appointment {
        date,
        language: fields.get(1).copied().unwrap_or_default(),
        interval: fields.get(2).copied().unwrap_or_default(),
    })
}
