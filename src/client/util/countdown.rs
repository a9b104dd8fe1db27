//! Time formatting for the timer tables and the EVE clock.
//!
//! EVE Online runs on UTC, so every display here is UTC regardless of the browser's timezone.

use chrono::{DateTime, TimeDelta, Utc};

/// Text shown in place of a countdown once the event time has been reached.
pub const EXPIRED: &str = "EXPIRED";

/// Format of the event time shown in timer table cells.
pub const EVE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format of the EVE clock in the navbar.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats the time left until an event.
///
/// Renders `Nd Nh Nm Ns`, omitting leading units that are zero; seconds are always shown.
/// Partial seconds are truncated, so the display reaches `0s` before the event and only
/// becomes [`EXPIRED`] once the remaining duration is zero or negative.
///
/// # Example
/// ```ignore
/// assert_eq!(format_countdown(TimeDelta::seconds(273_125)), "3d 3h 52m 5s");
/// assert_eq!(format_countdown(TimeDelta::milliseconds(3_599_999)), "59m 59s");
/// assert_eq!(format_countdown(TimeDelta::zero()), "EXPIRED");
/// ```
pub fn format_countdown(remaining: TimeDelta) -> String {
    if remaining <= TimeDelta::zero() {
        return EXPIRED.to_string();
    }

    let total_seconds = remaining.num_seconds();
    let days = total_seconds / 86_400;
    let hours = total_seconds % 86_400 / 3_600;
    let minutes = total_seconds % 3_600 / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub fn format_eve_time(time: &DateTime<Utc>) -> String {
    time.format(EVE_TIME_FORMAT).to_string()
}

pub fn format_clock(now: &DateTime<Utc>) -> String {
    now.format(CLOCK_FORMAT).to_string()
}

/// Builds the time cell of an outstanding timer: the event time, a newline, then the countdown.
pub fn time_cell(eve_time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format!(
        "{}\n{}",
        format_eve_time(eve_time),
        format_countdown(eve_time.signed_duration_since(*now))
    )
}
