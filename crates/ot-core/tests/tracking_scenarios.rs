//! End-to-end scans over realistic logs.

use chrono::NaiveDate;
use ot_core::calendar::date_to_serial;
use ot_core::{
    GridLayout, GridShape, LanguageAliases, ScanStop, Schedule, TrackedDays, TrackerConfig,
    TrackingEngine, track_appointments,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_slot_schedule() -> Schedule {
    Schedule::from_definitions(
        &[
            vec!["08:00-09:00", "09:00-10:00"],
            vec!["08:00-09:00", "09:00-10:00"],
        ],
        GridLayout::DayMajor,
        GridShape { days: 2, slots: 2 },
    )
    .unwrap()
}

fn record(day: NaiveDate, language: &str, interval: &str) -> String {
    format!("{}#{language}#{interval}", date_to_serial(day))
}

#[test]
fn aliases_fill_slots_and_cutoff_halts_scan() {
    // Wednesday: tracks Thursday and Friday, cutoff is Monday 2025-01-20
    let today = date(2025, 1, 29);
    let d1 = date(2025, 1, 30);
    let old = date(2025, 1, 17);

    let log = vec![
        record(d1, "English", "08:30"),
        record(d1, "Engleza", "09:30"),
        record(old, "English", "08:30"),
        // Never reached
        record(d1, "English", "08:45"),
    ];

    let result =
        track_appointments(&TrackerConfig::default(), two_slot_schedule(), today, &log).unwrap();

    assert_eq!(result.tracked_days.as_slice(), &[d1, date(2025, 1, 31)]);
    assert_eq!(result.schedule.counts(), vec![vec![1, 1], vec![0, 0]]);
    assert_eq!(result.summary.stop, ScanStop::Cutoff { line: 2 });
    assert_eq!(result.summary.lines_scanned, 3);
    assert_eq!(result.summary.counted, 2);
}

#[test]
fn sentinel_at_first_line_leaves_all_zero() {
    let log = ["#ERROR!", "45687#English#08:30"];
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        log,
    )
    .unwrap();

    assert_eq!(result.schedule.counts(), vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(result.summary.stop, ScanStop::Sentinel { line: 0 });
    assert_eq!(result.summary.lines_scanned, 1);
}

#[test]
fn sentinel_keeps_partial_counts() {
    let log = [
        "45688#English#09:00-09:30",
        "45688#Englsih#09:10-09:40",
        "#N/A",
        "45688#English#09:10",
    ];
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        log,
    )
    .unwrap();

    // 09:00 sits on the shared boundary and goes to the first slot
    assert_eq!(result.schedule.counts(), vec![vec![0, 0], vec![1, 1]]);
    assert_eq!(result.summary.stop, ScanStop::Sentinel { line: 2 });
}

#[test]
fn bare_old_date_still_halts_scan() {
    // 45600 is 2024-11-04, well before the 2025-01-20 cutoff
    let log = ["45600", "45687#English#08:30"];
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        log,
    )
    .unwrap();

    assert_eq!(result.summary.stop, ScanStop::Cutoff { line: 0 });
    assert_eq!(result.schedule.counts(), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
fn bare_tracked_date_is_unmatched() {
    let log = ["45687", "45687#English#08:30"];
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        log,
    )
    .unwrap();

    assert_eq!(result.summary.skipped_unmatched, 1);
    assert_eq!(result.summary.skipped_invalid, 0);
    assert_eq!(result.schedule.counts(), vec![vec![1, 0], vec![0, 0]]);
}

#[test]
fn empty_log_completes() {
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        Vec::<String>::new(),
    )
    .unwrap();

    assert_eq!(result.summary.stop, ScanStop::EndOfLog);
    assert_eq!(result.summary.lines_scanned, 0);
    assert_eq!(result.schedule.counts(), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
fn identical_inputs_give_identical_results() {
    let today = date(2025, 1, 31);
    let log = vec![
        record(date(2025, 2, 3), "English", "08:15-08:45"),
        "garbage".to_string(),
        record(date(2025, 2, 4), "Engleza", "09:45"),
        record(date(2025, 2, 4), "French", "09:45"),
        record(date(2025, 1, 30), "English", "08:00"),
    ];

    let first =
        track_appointments(&TrackerConfig::default(), two_slot_schedule(), today, &log).unwrap();
    let second =
        track_appointments(&TrackerConfig::default(), two_slot_schedule(), today, &log).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.schedule.counts(), vec![vec![1, 0], vec![0, 1]]);
}

#[test]
fn weekend_today_tracks_following_week() {
    // Saturday: tracked days are Monday and Tuesday
    let today = date(2025, 2, 1);
    let log = [
        record(date(2025, 2, 4), "English", "08:59"),
        record(date(2025, 2, 3), "English", "10:00"),
    ];
    let result =
        track_appointments(&TrackerConfig::default(), two_slot_schedule(), today, &log).unwrap();

    assert_eq!(
        result.tracked_days.as_slice(),
        &[date(2025, 2, 3), date(2025, 2, 4)]
    );
    assert_eq!(result.schedule.counts(), vec![vec![0, 1], vec![1, 0]]);
}

#[test]
fn explicit_days_and_aliases() {
    let tracked = TrackedDays::new(vec![date(2025, 3, 3), date(2025, 3, 5)]).unwrap();
    let engine = TrackingEngine::with_days(
        two_slot_schedule(),
        tracked,
        LanguageAliases::new(["Deutsch"]),
        date(2025, 2, 20),
    )
    .unwrap();

    let log = [
        record(date(2025, 3, 5), "Deutsch", "08:10"),
        record(date(2025, 3, 4), "Deutsch", "08:10"),
        record(date(2025, 3, 3), "English", "08:10"),
    ];
    let result = engine.run(&log).unwrap();

    assert_eq!(result.schedule.counts(), vec![vec![0, 0], vec![1, 0]]);
    assert_eq!(result.summary.skipped_unmatched, 2);
}

#[test]
fn result_serializes_counts_and_stop_reason() {
    let log = ["45687#English#08:30", "#ERROR!"];
    let result = track_appointments(
        &TrackerConfig::default(),
        two_slot_schedule(),
        date(2025, 1, 29),
        log,
    )
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tracked_days"][0], "2025-01-30");
    assert_eq!(json["cutoff"], "2025-01-20");
    assert_eq!(json["schedule"]["days"][0][0]["count"], 1);
    assert_eq!(json["schedule"]["days"][0][0]["interval"], "08:00-09:00");
    assert_eq!(json["summary"]["stop"]["reason"], "sentinel");
    assert_eq!(json["summary"]["stop"]["line"], 1);
}
