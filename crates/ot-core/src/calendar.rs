//! Business-day calendar arithmetic.
//!
//! A business day is any day that is not a Saturday or Sunday. Dates are
//! whole calendar days (`NaiveDate`); there is no time-of-day or timezone
//! component anywhere in the calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::TrackerError;

/// Spreadsheet date serial of 1970-01-01.
///
/// Serials count whole days from the spreadsheet epoch, which sits this
/// many days before the Unix epoch.
pub const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Business days in a calendar week.
const BUSINESS_DAYS_PER_WEEK: u64 = 5;

/// Check if a date is a business day (Monday through Friday).
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walk `offset` business days from `today`.
///
/// Positive offsets walk into the future, negative ones into the past.
/// Weekends are stepped over and never count toward the offset, so any
/// non-zero offset lands on a business day. A zero offset returns `today`
/// unchanged, even when `today` is a weekend.
///
/// The walk is computed in whole weeks first, so the cost does not grow
/// with the size of the offset.
pub fn business_day_offset(today: NaiveDate, offset: i64) -> Result<NaiveDate, TrackerError> {
    if offset == 0 {
        return Ok(today);
    }

    let out_of_range = || TrackerError::DateOutOfRange { offset };
    let forward = offset > 0;
    let steps = offset.unsigned_abs();

    // Walking from a weekend reaches the same days as walking from the
    // weekday right behind it.
    let mut current = anchor_on_weekday(today, forward).ok_or_else(out_of_range)?;

    // From a weekday, five business days is exactly one calendar week.
    let week_days = (steps / BUSINESS_DAYS_PER_WEEK)
        .checked_mul(7)
        .ok_or_else(out_of_range)?;
    current = shift(current, forward, week_days).ok_or_else(out_of_range)?;

    let mut remaining = steps % BUSINESS_DAYS_PER_WEEK;
    while remaining > 0 {
        current = shift(current, forward, 1).ok_or_else(out_of_range)?;
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    Ok(current)
}

/// Move a weekend date onto the weekday it is walked from.
///
/// Forward walks anchor on the preceding Friday, backward walks on the
/// following Monday.
fn anchor_on_weekday(date: NaiveDate, forward: bool) -> Option<NaiveDate> {
    match (date.weekday(), forward) {
        (Weekday::Sat, true) => shift(date, false, 1),
        (Weekday::Sun, true) => shift(date, false, 2),
        (Weekday::Sat, false) => shift(date, true, 2),
        (Weekday::Sun, false) => shift(date, true, 1),
        _ => Some(date),
    }
}

fn shift(date: NaiveDate, forward: bool, days: u64) -> Option<NaiveDate> {
    if forward {
        date.checked_add_days(Days::new(days))
    } else {
        date.checked_sub_days(Days::new(days))
    }
}

/// Whole-day ordinal of a date: days since 1970-01-01.
pub fn day_value(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Inverse of [`day_value`]. `None` outside chrono's date range.
pub fn from_day_value(value: i64) -> Option<NaiveDate> {
    let days_from_ce = value.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(days_from_ce).ok()?)
}

/// Inclusive day comparison: `date` is the same day as `cutoff` or earlier.
pub fn is_on_or_before(date: NaiveDate, cutoff: NaiveDate) -> bool {
    day_value(date) <= day_value(cutoff)
}

/// Convert a spreadsheet date serial into a calendar day.
pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    from_day_value(serial.checked_sub(UNIX_EPOCH_SERIAL)?)
}

/// Convert a calendar day into its spreadsheet date serial.
pub fn date_to_serial(date: NaiveDate) -> i64 {
    day_value(date) + UNIX_EPOCH_SERIAL
}
