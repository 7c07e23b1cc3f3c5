// src/application/dates.rs
//! Date normalization shared by the article and comment flows.
//!
//! Timestamps are stored as UTC instants. Users submit calendar dates as
//! `DD.MM.YYYY` and read timestamps back as `DD.MM.YYYY, HH:mm`, both
//! interpreted in the configured display offset.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc,
};

/// Format accepted for user submitted calendar dates.
pub const INPUT_DATE_FORMAT: &str = "%d.%m.%Y";
/// Format used when rendering timestamps for clients.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";
/// Rendered in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Source of a date that has to be normalized before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Stamp the current instant.
    Now,
    /// A `DD.MM.YYYY` string taken from a form.
    Submitted(&'a str),
}

#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer {
    offset: FixedOffset,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl DateNormalizer {
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Resolves `input` to the instant that should be stored.
    ///
    /// A submitted date that falls on the same calendar day as `now` resolves
    /// to `now` itself, any other date to its start of day. Returns `None`
    /// when the submitted string is not a `DD.MM.YYYY` date.
    pub fn canonicalize(&self, input: DateInput<'_>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let raw = match input {
            DateInput::Now => return Some(now),
            DateInput::Submitted(raw) => raw,
        };

        let date = NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).ok()?;
        if date == now.with_timezone(&self.offset).date_naive() {
            return Some(now);
        }

        let start_of_day = date.and_hms_opt(0, 0, 0)?;
        self.offset
            .from_local_datetime(&start_of_day)
            .single()
            .map(|local| local.with_timezone(&Utc))
    }

    /// String-level form of [`Self::canonicalize`]: the instant as an
    /// ISO-8601 string, or `Invalid date` when the input cannot be parsed.
    pub fn to_canonical(&self, input: DateInput<'_>, now: DateTime<Utc>) -> String {
        self.canonicalize(input, now).map_or_else(
            || INVALID_DATE.to_string(),
            |instant| instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    pub fn display(&self, instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.offset)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    /// String-level form of [`Self::display`] for raw timestamps. Never
    /// fails: anything that is not an ISO-8601 timestamp or date renders as
    /// `Invalid date`.
    pub fn to_display(&self, raw: &str) -> String {
        self.parse_timestamp(raw.trim())
            .map_or_else(|| INVALID_DATE.to_string(), |instant| self.display(&instant))
    }

    fn parse_timestamp(&self, raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        // Timestamps without an offset are read in the display offset.
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;

        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}
