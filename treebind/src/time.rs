//! Coercion for date/time and duration scalars.
//!
//! Durations arrive in two shapes: a clock literal (`[d.]hh:mm[:ss[.frac]]`)
//! or a bare integer counting 100-nanosecond ticks. Date/times parse with
//! the call's exact format when one is configured, otherwise with the
//! culture's general patterns; offset-carrying values keep their source
//! offset instead of being converted.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::DeserializeError;
use crate::options::Context;
use crate::scalar::Scalar;

const NANOS_PER_TICK: u64 = 100;

impl Scalar for Duration {
    const EXPECTED: &'static str = "time span";

    fn empty() -> Self {
        Duration::ZERO
    }

    fn parse_text(text: &str, _cx: &Context<'_>) -> Result<Self, DeserializeError> {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            return text
                .parse::<u64>()
                .ok()
                .and_then(|ticks| ticks.checked_mul(NANOS_PER_TICK))
                .map(Duration::from_nanos)
                .ok_or_else(|| DeserializeError::coerce(text, Self::EXPECTED));
        }
        parse_clock(text).ok_or_else(|| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

/// Parse a clock-style duration literal: `hh:mm`, `hh:mm:ss`,
/// `hh:mm:ss.frac`, optionally prefixed with whole days as `d.`.
fn parse_clock(text: &str) -> Option<Duration> {
    let mut parts = text.split(':');
    let first = parts.next()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let seconds_part = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let (days, hours): (u64, u64) = match first.split_once('.') {
        Some((days, hours)) => (days.parse().ok()?, hours.parse().ok()?),
        None => (0, first.parse().ok()?),
    };
    let (seconds, nanos): (u64, u32) = match seconds_part {
        None => (0, 0),
        Some(part) => match part.split_once('.') {
            Some((whole, fraction)) => (whole.parse().ok()?, parse_fraction(fraction)?),
            None => (part.parse().ok()?, 0),
        },
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let total = days * 86_400 + hours * 3_600 + minutes * 60 + seconds;
    Some(Duration::new(total, nanos))
}

/// Sub-second digits to nanoseconds; up to nine digits of precision.
fn parse_fraction(fraction: &str) -> Option<u32> {
    if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = fraction.parse().ok()?;
    Some(value * 10u32.pow(9 - fraction.len() as u32))
}

impl Scalar for NaiveDateTime {
    const EXPECTED: &'static str = "date/time";

    fn empty() -> Self {
        DateTime::<Utc>::UNIX_EPOCH.naive_utc()
    }

    fn parse_text(text: &str, cx: &Context<'_>) -> Result<Self, DeserializeError> {
        if let Some(format) = cx.date_format {
            return NaiveDateTime::parse_from_str(text, format)
                .or_else(|_| DateTime::parse_from_str(text, format).map(|dt| dt.naive_local()))
                .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED));
        }
        parse_general(text, cx).ok_or_else(|| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

impl Scalar for DateTime<FixedOffset> {
    const EXPECTED: &'static str = "date/time with offset";

    fn empty() -> Self {
        DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
    }

    fn parse_text(text: &str, cx: &Context<'_>) -> Result<Self, DeserializeError> {
        if let Some(format) = cx.date_format {
            // A format without an offset directive still parses; the value
            // is then anchored at UTC.
            return DateTime::parse_from_str(text, format)
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(text, format)
                        .map(|naive| naive.and_utc().fixed_offset())
                })
                .map_err(|_| DeserializeError::coerce(text, Self::EXPECTED));
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed);
        }
        parse_general(text, cx)
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or_else(|| DeserializeError::coerce(text, Self::EXPECTED))
    }
}

fn parse_general(text: &str, cx: &Context<'_>) -> Option<NaiveDateTime> {
    for format in &cx.culture.datetime_formats {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }
    for format in &cx.culture.date_formats {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}
