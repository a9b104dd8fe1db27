//! Event time entry of the timer form.
//!
//! A timer's event time is entered either as an absolute date or as the time remaining until
//! it happens. Focusing one kind of field clears the other so only one is in use.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

/// Format of the date field, in EVE time.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeEntryError {
    #[error("Invalid date {0:?}, expected YYYY-MM-DD HH:MM")]
    InvalidDate(String),
    #[error("Invalid {field} remaining {value:?}, expected a non-negative whole number")]
    InvalidRemaining { field: &'static str, value: String },
    #[error("Time remaining is too far in the future")]
    OutOfRange,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeEntry {
    pub date: String,
    pub days: String,
    pub hours: String,
    pub minutes: String,
}

impl TimeEntry {
    pub fn focus_time_remaining(&mut self) {
        self.date.clear();
    }

    pub fn focus_date(&mut self) {
        self.days.clear();
        self.hours.clear();
        self.minutes.clear();
    }

    /// Resolves the entry into an event time.
    ///
    /// A filled date field takes precedence. Otherwise the remaining fields are added to
    /// `now`, with empty fields counting as zero.
    ///
    /// # Returns
    /// - `Ok(Some(time))` - The entered event time
    /// - `Ok(None)` - Nothing has been entered
    /// - `Err(TimeEntryError)` - The date or a remaining field can't be parsed
    pub fn resolve(&self, now: &DateTime<Utc>) -> Result<Option<DateTime<Utc>>, TimeEntryError> {
        let date = self.date.trim();
        if !date.is_empty() {
            return NaiveDateTime::parse_from_str(date, DATE_INPUT_FORMAT)
                .map(|naive| Some(naive.and_utc()))
                .map_err(|_| TimeEntryError::InvalidDate(date.to_string()));
        }

        if [&self.days, &self.hours, &self.minutes]
            .iter()
            .all(|field| field.trim().is_empty())
        {
            return Ok(None);
        }

        let remaining = TimeDelta::days(parse_remaining("days", &self.days)?)
            + TimeDelta::hours(parse_remaining("hours", &self.hours)?)
            + TimeDelta::minutes(parse_remaining("minutes", &self.minutes)?);

        now.checked_add_signed(remaining)
            .map(Some)
            .ok_or(TimeEntryError::OutOfRange)
    }
}

fn parse_remaining(field: &'static str, value: &str) -> Result<i64, TimeEntryError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }

    match value.parse::<u32>() {
        Ok(parsed) => Ok(i64::from(parsed)),
        Err(_) => Err(TimeEntryError::InvalidRemaining {
            field,
            value: value.to_string(),
        }),
    }
}
