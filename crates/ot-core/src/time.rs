//! Time-of-day parsing for slot and appointment intervals.

/// Separator between the start and end of an interval (`"08:00-09:00"`).
pub const INTERVAL_SEPARATOR: char = '-';

/// A time of day in `HH.MM` form: hours plus minutes / 100.
///
/// This is not a fraction of an hour (`08:30` is `8.30`, not `8.5`), but
/// every comparison uses the same normalisation, so ordering is what
/// matters. The value is stored as the integer `HH * 100 + MM`, which
/// keeps comparisons exact without a floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(i64);

impl TimeOfDay {
    /// Parses an `"HH:MM"` string.
    ///
    /// Each component is read as a leading integer, so `"9:05"` and
    /// `"09:05:00"` both parse. Returns `None` when either component is
    /// missing or has no digits.
    pub fn parse(s: &str) -> Option<Self> {
        let (hours, minutes) = s.split_once(':')?;
        let hours = leading_int(hours)?;
        let minutes = leading_int(minutes)?;
        hours.checked_mul(100)?.checked_add(minutes).map(Self)
    }

    /// The `HH + MM / 100` value.
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Splits an interval into its bounds.
///
/// `"08:00-09:00"` yields two bounds, a point-in-time `"08:00"` yields one.
/// Whitespace anywhere in the input is ignored.
pub fn split_interval(s: &str) -> Vec<String> {
    s.split(INTERVAL_SEPARATOR)
        .map(|bound| bound.chars().filter(|c| !c.is_whitespace()).collect())
        .collect()
}

/// Reads the integer at the start of `s`, ignoring leading whitespace and
/// anything after the digits. `None` if there are no digits.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
