/*!
 * Timecode value type for cue timing.
 *
 * A `TimeCode` is a four-field timestamp (hours, minutes, seconds,
 * hundredths) with a canonical `HH:MM:SS:CC` text form and a total order
 * derived from its value in seconds. Construction clamps every field into
 * its legal range instead of rejecting, so a `TimeCode` is always valid.
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// @const: canonical HH:MM:SS:CC timecode regex
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+|):(\d+|):(\d+|):(\d+|)$").unwrap()
});

/// Maximum value for the hours field
pub const MAX_HOURS: u8 = 99;

/// Maximum value for the minutes field
pub const MAX_MINUTES: u8 = 59;

/// Maximum value for the seconds field
pub const MAX_SECONDS: u8 = 59;

/// Maximum value for the hundredths field
pub const MAX_HUNDREDTHS: u8 = 99;

/// Error returned when parsing a timecode from its canonical text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid timecode format: {0:?} (expected HH:MM:SS:CC)")]
pub struct TimeCodeFormatError(pub String);

/// A four-field timestamp: hours, minutes, seconds, hundredths of a second.
///
/// Fields are clamped into range at construction, so every `TimeCode` value
/// is legal. Ordering and equality are defined over the derived key
/// `hours*3600 + minutes*60 + seconds + hundredths*0.01` (see
/// [`TimeCode::to_seconds`]), computed in integer hundredths so the order
/// is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeCode {
    hours: u8,
    minutes: u8,
    seconds: u8,
    hundredths: u8,
}

impl TimeCode {
    /// Create a timecode from integer fields, clamping each into range.
    ///
    /// Out-of-range input clamps to the nearest bound rather than failing:
    /// the caller always ends up with a legal timecode.
    pub fn from_fields(hours: u32, minutes: u32, seconds: u32, hundredths: u32) -> Self {
        TimeCode {
            hours: clamp_field(hours, MAX_HOURS),
            minutes: clamp_field(minutes, MAX_MINUTES),
            seconds: clamp_field(seconds, MAX_SECONDS),
            hundredths: clamp_field(hundredths, MAX_HUNDREDTHS),
        }
    }

    /// Parse a timecode from raw per-field strings.
    ///
    /// A field that is empty or not numeric is treated as 0, then clamped.
    /// This never fails; field-level re-prompting is the caller's concern.
    pub fn parse_fields(hours: &str, minutes: &str, seconds: &str, hundredths: &str) -> Self {
        Self::from_fields(
            parse_field_or_zero(hours),
            parse_field_or_zero(minutes),
            parse_field_or_zero(seconds),
            parse_field_or_zero(hundredths),
        )
    }

    /// Hours field (0-99)
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes field (0-59)
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds field (0-59)
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Hundredths field (0-99)
    pub fn hundredths(&self) -> u8 {
        self.hundredths
    }

    /// Comparison key as a number of seconds:
    /// `hours*3600 + minutes*60 + seconds + hundredths*0.01`.
    pub fn to_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0
            + self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.hundredths as f64 * 0.01
    }

    /// The same key scaled to whole hundredths of a second.
    ///
    /// Equal to `to_seconds() * 100` exactly, because the hundredths field
    /// is clamped to 0-99; ordering over this integer therefore agrees with
    /// ordering over the fractional key.
    pub fn total_hundredths(&self) -> u32 {
        debug_assert!(self.hundredths <= MAX_HUNDREDTHS, "hundredths field out of range");
        self.hours as u32 * 360_000
            + self.minutes as u32 * 6_000
            + self.seconds as u32 * 100
            + self.hundredths as u32
    }
}

impl PartialOrd for TimeCode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeCode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_hundredths().cmp(&other.total_hundredths())
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.hundredths
        )
    }
}

impl FromStr for TimeCode {
    type Err = TimeCodeFormatError;

    /// Parse the canonical `HH:MM:SS:CC` form.
    ///
    /// The shape (four colon-separated fields) must match; within a field
    /// the clamp-not-reject policy applies, and a blank field reads as 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIMECODE_REGEX
            .captures(s.trim())
            .ok_or_else(|| TimeCodeFormatError(s.to_string()))?;

        Ok(Self::from_fields(
            parse_field_or_zero(&caps[1]),
            parse_field_or_zero(&caps[2]),
            parse_field_or_zero(&caps[3]),
            parse_field_or_zero(&caps[4]),
        ))
    }
}

/// Clamp a raw field value into `0..=max`.
fn clamp_field(value: u32, max: u8) -> u8 {
    value.min(max as u32) as u8
}

/// Parse a raw field string, treating empty or non-numeric input as 0.
fn parse_field_or_zero(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}
