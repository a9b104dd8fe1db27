//! Tests for the per-second countdown refresh of the current timers table.

use chrono::{SecondsFormat, TimeDelta};
use timerboard::{
    client::{
        store::timer_table::{prepare_rows, refresh_countdowns, row_class},
        util::countdown::EXPIRED,
    },
    model::timer::TimerRowDto,
};

use super::*;

fn list_response(entries: &[(i64, DateTime<Utc>, bool, bool)]) -> String {
    let entries: Vec<String> = entries
        .iter()
        .map(|(id, eve_time, is_passed, is_important)| {
            format!(
                r##"{{"id": {}, "location": "<a href=\"#\">Jita</a>", "system_name": "Jita",
                    "eve_time": "{}", "is_passed": {}, "is_important": {}}}"##,
                id,
                eve_time.to_rfc3339_opts(SecondsFormat::Secs, false),
                is_passed,
                is_important
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// Tests a timer one hour out after one tick.
///
/// Verifies that a freshly loaded outstanding timer shows its event time and a countdown of
/// just under an hour once the clock has ticked.
///
/// Expected: "2024-01-15 13:00\n59m 59s"
#[test]
fn shows_countdown_after_one_tick() {
    let json = list_response(&[(1, now() + TimeDelta::milliseconds(3_600_000), false, false)]);
    let mut rows: Vec<TimerRowDto> = serde_json::from_str(&json).unwrap();
    prepare_rows(&mut rows);

    let changed = refresh_countdowns(&mut rows, &(now() + TimeDelta::milliseconds(1)));

    assert_eq!(changed, 1);
    assert_eq!(rows[0].time, "2024-01-15 13:00\n59m 59s");
    assert!(!rows[0].time.contains(EXPIRED));
}

/// Tests a passed timer over many ticks.
///
/// Verifies that the time cell seeded at load time is never changed by the countdown.
///
/// Expected: cell stays "2024-01-15 11:00"
#[test]
fn leaves_passed_timer_frozen() {
    let json = list_response(&[(1, now() - TimeDelta::hours(1), true, false)]);
    let mut rows: Vec<TimerRowDto> = serde_json::from_str(&json).unwrap();
    prepare_rows(&mut rows);

    for second in 0..120 {
        refresh_countdowns(&mut rows, &(now() + TimeDelta::seconds(second)));
    }

    assert_eq!(rows[0].time, "2024-01-15 11:00");
    assert_eq!(row_class(&rows[0]), Some("active"));
}

/// Tests a timer reaching its event time while the board is open.
///
/// Expected: countdown replaced by EXPIRED once the event time is reached
#[test]
fn expires_outstanding_timer() {
    let json = list_response(&[(1, now() + TimeDelta::seconds(2), false, true)]);
    let mut rows: Vec<TimerRowDto> = serde_json::from_str(&json).unwrap();
    prepare_rows(&mut rows);

    refresh_countdowns(&mut rows, &(now() + TimeDelta::seconds(1)));
    assert_eq!(rows[0].time, "2024-01-15 12:00\n1s");

    refresh_countdowns(&mut rows, &(now() + TimeDelta::seconds(2)));
    assert_eq!(rows[0].time, "2024-01-15 12:00\nEXPIRED");
    assert_eq!(row_class(&rows[0]), Some("warning"));
}

/// Tests refreshing a mixed table.
///
/// Expected: only the two outstanding rows change
#[test]
fn refreshes_only_outstanding_rows() {
    let json = list_response(&[
        (1, now() + TimeDelta::hours(2), false, false),
        (2, now() - TimeDelta::hours(2), true, true),
        (3, now() + TimeDelta::days(3), false, true),
    ]);
    let mut rows: Vec<TimerRowDto> = serde_json::from_str(&json).unwrap();
    prepare_rows(&mut rows);

    let changed = refresh_countdowns(&mut rows, &now());

    assert_eq!(changed, 2);
    assert_eq!(rows[0].time, "2024-01-15 14:00\n2h 0m 0s");
    assert_eq!(rows[1].time, "2024-01-15 10:00");
    assert_eq!(rows[2].time, "2024-01-18 12:00\n3d 0h 0m 0s");
}

/// Tests rows carrying the cells exactly as the server renders them.
///
/// Verifies that the server's `<br>` separated time cell is shown on two lines for a passed
/// timer, that an outstanding timer's cell is replaced by the live countdown, and that the
/// server's own details link is dropped from the actions cell.
///
/// Expected: no markup left in any time cell, no `data-timerpk` left in the actions
#[test]
fn normalizes_server_rendered_cells() {
    let json = r##"[
        {"id": 7, "time": "2024-01-15 11:00<br>PASSED", "eve_time": "2024-01-15T11:00:00+00:00",
         "is_passed": true, "is_important": false,
         "actions": "<a type=\"button\" class=\"btn btn-default\" data-toggle=\"modal\" data-target=\"#modalFitting\" data-timerpk=\"7\"><span class=\"glyphicon glyphicon-zoom-in\"></span></a>&nbsp;"},
        {"id": 8, "time": "2024-01-15 13:00<br>1h", "eve_time": "2024-01-15T13:00:00+00:00",
         "is_passed": false, "is_important": false, "actions": ""}
    ]"##;
    let mut rows: Vec<TimerRowDto> = serde_json::from_str(json).unwrap();
    prepare_rows(&mut rows);

    refresh_countdowns(&mut rows, &now());

    assert_eq!(rows[0].time, "2024-01-15 11:00\nPASSED");
    assert_eq!(rows[1].time, "2024-01-15 13:00\n1h 0m 0s");
    assert!(rows.iter().all(|row| !row.time.contains("<br>")));
    assert!(!rows[0].actions.contains("data-timerpk"));
}
