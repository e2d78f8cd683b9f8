//! Wall-clock time and daily time window models.
//!
//! # Time Model
//! Times are minutes since midnight on a single day, `00:00..=23:59`.
//! There is no overnight wraparound: a window always starts and ends on
//! the same day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeParseError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Accepts one- or two-digit hours and an optional `:SS` suffix (ignored),
/// with surrounding whitespace. Anything else is an error; a missing or
/// malformed time is never read as midnight.
///
/// ```
/// use tutor_schedule::models::parse_minutes;
///
/// assert_eq!(parse_minutes("14:30"), Ok(870));
/// assert_eq!(parse_minutes("9:05:00"), Ok(545));
/// assert!(parse_minutes("").is_err());
/// assert!(parse_minutes("24:00").is_err());
/// ```
pub fn parse_minutes(input: &str) -> Result<u16, TimeParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let malformed = || TimeParseError::Malformed {
        input: text.to_string(),
    };

    let mut parts = text.split(':');
    let hour = parts.next().ok_or_else(malformed)?;
    let minute = parts.next().ok_or_else(malformed)?;
    let second = parts.next();
    if parts.next().is_some() {
        return Err(malformed());
    }

    let hour = parse_field(hour, 1).ok_or_else(malformed)?;
    let minute = parse_field(minute, 2).ok_or_else(malformed)?;
    if let Some(second) = second {
        let second = parse_field(second, 2).ok_or_else(malformed)?;
        if second > 59 {
            return Err(TimeParseError::OutOfRange {
                input: text.to_string(),
            });
        }
    }

    if hour > 23 || minute > 59 {
        return Err(TimeParseError::OutOfRange {
            input: text.to_string(),
        });
    }

    Ok(hour * 60 + minute)
}

/// Parses an all-digit field of `min_len..=2` characters.
fn parse_field(field: &str, min_len: usize) -> Option<u16> {
    if field.len() < min_len || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from hour and minute. Returns `None` outside 00:00-23:59.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.minutes % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_minutes(s).map(|minutes| Self { minutes })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time interval [start, end] within one day.
///
/// Closed interval: a session ending at 16:00 fits an availability that
/// ends at 16:00. Always `start <= end`; every constructor, including
/// deserialization, enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Unchecked wire form of a [`TimeWindow`].
#[derive(Deserialize)]
struct RawWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawWindow> for TimeWindow {
    type Error = String;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
            .ok_or_else(|| format!("window ends before it starts: {}-{}", raw.start, raw.end))
    }
}

impl TimeWindow {
    /// Creates a window. Returns `None` if `end` is before `start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Parses a window from two `"HH:MM"` strings.
    ///
    /// Returns `Ok(None)` when both times parse but `end` is before `start`.
    pub fn parse(start: &str, end: &str) -> Result<Option<Self>, TimeParseError> {
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        Ok(Self::new(start, end))
    }

    /// Window start (inclusive).
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Window end (inclusive).
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether this window fully contains `other`.
    ///
    /// `self.start <= other.start && other.end <= self.end`. Partial overlap
    /// is not containment.
    #[inline]
    pub fn contains(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Minutes of this window left over around a contained `inner` window.
    /// `None` if `inner` is not contained.
    pub fn slack_minutes(&self, inner: &TimeWindow) -> Option<u16> {
        self.contains(inner)
            .then(|| self.duration_minutes().saturating_sub(inner.duration_minutes()))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
