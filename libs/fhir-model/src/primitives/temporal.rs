//! Temporal primitives with explicit precision tracking.
//!
//! FHIR dates and date-times carry partial precision: a recorded `2019-03`
//! is not the same statement as `2019-03-01`. Values therefore keep the
//! components that were actually given, and rendering reproduces the input
//! precision exactly. Comparison across different precisions is
//! indeterminate once the shared prefix is equal, so ordering is partial.

use aurum_codec::{Scalar, ScalarError};
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Precision of a [`Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// Precision of a [`DateTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimePrecision {
    Year,
    Month,
    Day,
    /// Full date, clock time and offset; seconds always present.
    Second,
    /// As `Second`, with fractional second digits.
    Fraction,
}

/// A UTC offset as written on the wire. `Z` and `+00:00` denote the same
/// instant but render differently, so they are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtcOffset {
    Z,
    /// Signed offset in minutes, within +/-14:00.
    Minutes(i16),
}

impl UtcOffset {
    pub fn offset_minutes(self) -> i16 {
        match self {
            UtcOffset::Z => 0,
            UtcOffset::Minutes(m) => m,
        }
    }

    fn parse(s: &str) -> Result<Self, ScalarError> {
        if s == "Z" {
            return Ok(UtcOffset::Z);
        }
        let bytes = s.as_bytes();
        if bytes.len() != 6 || (bytes[0] != b'+' && bytes[0] != b'-') || bytes[3] != b':' {
            return Err(ScalarError::lexical(format!("invalid timezone offset `{s}`")));
        }
        let hours: i16 = s[1..3]
            .parse()
            .map_err(|_| ScalarError::lexical(format!("invalid timezone offset `{s}`")))?;
        let minutes: i16 = s[4..6]
            .parse()
            .map_err(|_| ScalarError::lexical(format!("invalid timezone offset `{s}`")))?;
        if hours > 14 || minutes > 59 {
            return Err(ScalarError::lexical(format!("invalid timezone offset `{s}`")));
        }
        let total = hours * 60 + minutes;
        let signed = if bytes[0] == b'-' { -total } else { total };
        Ok(UtcOffset::Minutes(signed))
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtcOffset::Z => f.write_str("Z"),
            UtcOffset::Minutes(m) => {
                let sign = if *m < 0 { '-' } else { '+' };
                let abs = m.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
            }
        }
    }
}

/// A date of year, year-month or full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
}

impl Date {
    pub fn from_year(year: i32) -> Result<Self, ScalarError> {
        check_year(year)?;
        Ok(Self {
            year,
            month: None,
            day: None,
        })
    }

    pub fn from_year_month(year: i32, month: u8) -> Result<Self, ScalarError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(ScalarError::lexical(format!("month {month} out of range")));
        }
        Ok(Self {
            year,
            month: Some(month),
            day: None,
        })
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ScalarError> {
        check_year(year)?;
        NaiveDate::from_ymd_opt(year, month.into(), day.into())
            .ok_or_else(|| ScalarError::lexical(format!("{year:04}-{month:02}-{day:02} is not a calendar date")))?;
        Ok(Self {
            year,
            month: Some(month),
            day: Some(day),
        })
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (None, _) => DatePrecision::Year,
            (Some(_), None) => DatePrecision::Month,
            (Some(_), Some(_)) => DatePrecision::Day,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// The calendar date, when precision reaches a full day.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match (self.month, self.day) {
            (Some(m), Some(d)) => NaiveDate::from_ymd_opt(self.year, m.into(), d.into()),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match (self.month, self.day) {
            (None, _) => format!("{:04}", self.year),
            (Some(m), None) => format!("{:04}-{m:02}", self.year),
            (Some(m), Some(d)) => format!("{:04}-{m:02}-{d:02}", self.year),
        }
    }

    /// Precision-aware comparison: indeterminate when the shared prefix is
    /// equal but the precisions differ.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => {}
            order => return Some(order),
        }
        match (self.month, other.month) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) | (Some(_), None) => return None,
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {}
                order => return Some(order),
            },
        }
        match (self.day, other.day) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) | (Some(_), None) => None,
            (Some(a), Some(b)) => Some(a.cmp(&b)),
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl FromStr for Date {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let bad = || ScalarError::lexical(format!("`{s}` is not a date"));
        match parts.as_slice() {
            [year] => Date::from_year(parse_fixed(year, 4).ok_or_else(bad)?),
            [year, month] => Date::from_year_month(
                parse_fixed(year, 4).ok_or_else(bad)?,
                parse_fixed(month, 2).ok_or_else(bad)? as u8,
            ),
            [year, month, day] => Date::from_ymd(
                parse_fixed(year, 4).ok_or_else(bad)?,
                parse_fixed(month, 2).ok_or_else(bad)? as u8,
                parse_fixed(day, 2).ok_or_else(bad)? as u8,
            ),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Scalar for Date {
    const NAME: &'static str = "date";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        s.parse()
    }

    fn to_json(&self) -> Value {
        Value::String(self.render())
    }
}

/// A time of day, seconds always present, fractional digits preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    time: NaiveTime,
    fraction_digits: u8,
}

impl Time {
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, ScalarError> {
        let time = NaiveTime::from_hms_opt(hour.into(), minute.into(), second.into())
            .ok_or_else(|| {
                ScalarError::lexical(format!("{hour:02}:{minute:02}:{second:02} is not a clock time"))
            })?;
        Ok(Self {
            time,
            fraction_digits: 0,
        })
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        self.time
    }

    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{:02}:{:02}:{:02}",
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        );
        if self.fraction_digits > 0 {
            let nanos = format!("{:09}", self.time.nanosecond());
            out.push('.');
            out.push_str(&nanos[..self.fraction_digits as usize]);
        }
        out
    }

    /// Ordering by clock position; the number of fractional digits written
    /// does not participate.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl FromStr for Time {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ScalarError::lexical(format!("`{s}` is not a time"));
        let (main, fraction) = match s.split_once('.') {
            Some((main, fraction)) => (main, Some(fraction)),
            None => (s, None),
        };
        let parts: Vec<&str> = main.split(':').collect();
        let [hour, minute, second] = parts.as_slice() else {
            return Err(bad());
        };
        let hour = parse_fixed(hour, 2).ok_or_else(bad)?;
        let minute = parse_fixed(minute, 2).ok_or_else(bad)?;
        let second = parse_fixed(second, 2).ok_or_else(bad)?;
        let (nanos, digits) = match fraction {
            None => (0u32, 0u8),
            Some(fraction) => {
                if fraction.is_empty()
                    || fraction.len() > 9
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(bad());
                }
                let padded = format!("{fraction:0<9}");
                let nanos: u32 = padded.parse().map_err(|_| bad())?;
                (nanos, fraction.len() as u8)
            }
        };
        let time = NaiveTime::from_hms_nano_opt(hour as u32, minute as u32, second as u32, nanos)
            .ok_or_else(bad)?;
        Ok(Self {
            time,
            fraction_digits: digits,
        })
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Scalar for Time {
    const NAME: &'static str = "time";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        s.parse()
    }

    fn to_json(&self) -> Value {
        Value::String(self.render())
    }
}

/// A date-time of partial date precision, or a full date with clock time
/// and mandatory UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    clock: Option<(Time, UtcOffset)>,
}

impl DateTime {
    pub fn from_date(date: Date) -> Self {
        Self { date, clock: None }
    }

    pub fn from_parts(date: Date, time: Time, offset: UtcOffset) -> Result<Self, ScalarError> {
        if date.precision() != DatePrecision::Day {
            return Err(ScalarError::lexical(
                "a date-time with a clock time requires a full date",
            ));
        }
        Ok(Self {
            date,
            clock: Some((time, offset)),
        })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn clock(&self) -> Option<(Time, UtcOffset)> {
        self.clock
    }

    pub fn precision(&self) -> DateTimePrecision {
        match (&self.clock, self.date.precision()) {
            (Some((time, _)), _) if time.fraction_digits() > 0 => DateTimePrecision::Fraction,
            (Some(_), _) => DateTimePrecision::Second,
            (None, DatePrecision::Year) => DateTimePrecision::Year,
            (None, DatePrecision::Month) => DateTimePrecision::Month,
            (None, DatePrecision::Day) => DateTimePrecision::Day,
        }
    }

    /// Nanoseconds since the epoch, when the value pins an instant.
    fn epoch_nanos(&self) -> Option<i128> {
        let (time, offset) = self.clock?;
        let date = self.date.to_naive_date()?;
        let naive = date.and_time(time.to_naive_time());
        let local = naive.and_utc().timestamp_nanos_opt()? as i128;
        Some(local - i128::from(offset.offset_minutes()) * 60 * 1_000_000_000)
    }

    pub fn render(&self) -> String {
        match &self.clock {
            None => self.date.render(),
            Some((time, offset)) => format!("{}T{}{}", self.date.render(), time.render(), offset),
        }
    }

    /// Precision-aware comparison. Timezone offsets are normalized away
    /// when both sides pin an instant.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.epoch_nanos(), other.epoch_nanos()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => self.date.compare(&other.date),
            _ => match self.date.compare(&other.date) {
                Some(Ordering::Equal) | None => None,
                order => order,
            },
        }
    }
}

impl FromStr for DateTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((date_part, time_part)) = s.split_once('T') else {
            return Ok(Self::from_date(date_part_only(s)?));
        };
        let date = date_part_only(date_part)?;
        let offset_at = time_part
            .rfind(['Z', '+', '-'])
            .ok_or_else(|| ScalarError::lexical("a date-time with a clock time requires a timezone"))?;
        let (clock_str, offset_str) = time_part.split_at(offset_at);
        let offset = UtcOffset::parse(offset_str)?;
        let time: Time = clock_str.parse()?;
        Self::from_parts(date, time, offset)
    }
}

fn date_part_only(s: &str) -> Result<Date, ScalarError> {
    s.parse()
        .map_err(|_| ScalarError::lexical(format!("`{s}` is not a date-time")))
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Scalar for DateTime {
    const NAME: &'static str = "dateTime";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        s.parse()
    }

    fn to_json(&self) -> Value {
        Value::String(self.render())
    }
}

/// A fully specified moment: full date, clock time to at least the second,
/// and a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(DateTime);

impl Instant {
    pub fn from_parts(date: Date, time: Time, offset: UtcOffset) -> Result<Self, ScalarError> {
        Ok(Self(DateTime::from_parts(date, time, offset)?))
    }

    pub fn as_date_time(&self) -> &DateTime {
        &self.0
    }

    pub fn render(&self) -> String {
        self.0.render()
    }

    /// Instants always pin a moment, so comparison is total.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl FromStr for Instant {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: DateTime = s.parse()?;
        if parsed.clock().is_none() {
            return Err(ScalarError::lexical(format!(
                "`{s}` is not an instant: clock time and timezone are required"
            )));
        }
        Ok(Self(parsed))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Scalar for Instant {
    const NAME: &'static str = "instant";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        s.parse()
    }

    fn to_json(&self) -> Value {
        Value::String(self.render())
    }
}

fn check_year(year: i32) -> Result<(), ScalarError> {
    if (1..=9999).contains(&year) {
        Ok(())
    } else {
        Err(ScalarError::lexical(format!("year {year} out of range")))
    }
}

/// Parse a zero-padded decimal field of exactly `width` digits.
fn parse_fixed(s: &str, width: usize) -> Option<i32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_precision_round_trips() {
        for raw in ["2019", "2019-03", "2019-03-11"] {
            let date: Date = raw.parse().unwrap();
            assert_eq!(date.render(), raw);
        }
    }

    #[test]
    fn date_rejects_unpadded_and_invalid() {
        assert!("2019-3".parse::<Date>().is_err());
        assert!("2019-02-30".parse::<Date>().is_err());
        assert!("19-02-03".parse::<Date>().is_err());
    }

    #[test]
    fn date_comparison_is_partial() {
        let year: Date = "2019".parse().unwrap();
        let month: Date = "2019-05".parse().unwrap();
        let later: Date = "2020".parse().unwrap();
        assert_eq!(year.compare(&later), Some(Ordering::Less));
        assert_eq!(year.compare(&month), None);
    }

    #[test]
    fn time_preserves_fraction_digits() {
        let t: Time = "08:30:00.120".parse().unwrap();
        assert_eq!(t.render(), "08:30:00.120");
        let plain: Time = "08:30:00".parse().unwrap();
        assert_eq!(plain.render(), "08:30:00");
        assert_eq!(t.compare(&plain), Ordering::Greater);
    }

    #[test]
    fn time_requires_seconds() {
        assert!("08:30".parse::<Time>().is_err());
    }

    #[test]
    fn datetime_requires_timezone_with_clock() {
        assert!("2019-03-11T10:00:00".parse::<DateTime>().is_err());
        let ok: DateTime = "2019-03-11T10:00:00+01:00".parse().unwrap();
        assert_eq!(ok.render(), "2019-03-11T10:00:00+01:00");
    }

    #[test]
    fn datetime_zulu_is_not_plus_zero() {
        let zulu: DateTime = "2019-03-11T10:00:00Z".parse().unwrap();
        let zero: DateTime = "2019-03-11T10:00:00+00:00".parse().unwrap();
        assert_ne!(zulu, zero);
        assert_eq!(zulu.compare(&zero), Some(Ordering::Equal));
    }

    #[test]
    fn datetime_offsets_normalize_for_comparison() {
        let a: DateTime = "2019-03-11T13:00:00+01:00".parse().unwrap();
        let b: DateTime = "2019-03-11T12:00:00Z".parse().unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
    }

    #[test]
    fn instant_requires_full_precision() {
        assert!("2019-03-11".parse::<Instant>().is_err());
        let ok: Instant = "2019-03-11T10:00:00.001Z".parse().unwrap();
        assert_eq!(ok.render(), "2019-03-11T10:00:00.001Z");
    }
}
