//! Date-times that remember how precise their source text was

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a year, a year-month or an ISO 8601 date-time")]
pub struct DatetimeFormatError(pub String);

/// A date-time parsed from `YYYY`, `YYYY-MM` or a full ISO 8601 string.
///
/// Missing parts are normalized to the first month / first day at midnight,
/// and the flags record which parts were present so that [`fmt::Display`]
/// reproduces the parsed precision. A UTC offset in the source text is kept
/// next to the local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoolabsDatetime {
    instant: NaiveDateTime,
    offset: Option<FixedOffset>,
    month_known: bool,
    day_known: bool,
}

impl GoolabsDatetime {
    /// Full-precision value
    pub fn full(instant: NaiveDateTime) -> Self {
        Self {
            instant,
            offset: None,
            month_known: true,
            day_known: true,
        }
    }

    /// Full-precision value with a UTC offset
    pub fn with_offset(instant: DateTime<FixedOffset>) -> Self {
        Self {
            offset: Some(*instant.offset()),
            ..Self::full(instant.naive_local())
        }
    }

    /// Year-only value, normalized to January 1st
    pub fn year(year: i32) -> Option<Self> {
        Some(Self {
            instant: midnight(year, 1, 1)?,
            offset: None,
            month_known: false,
            day_known: false,
        })
    }

    /// Year-month value, normalized to the 1st of the month
    pub fn year_month(year: i32, month: u32) -> Option<Self> {
        Some(Self {
            instant: midnight(year, month, 1)?,
            offset: None,
            month_known: true,
            day_known: false,
        })
    }

    pub fn parse(text: &str) -> Result<Self, DatetimeFormatError> {
        let iso = expand_iso(text);
        if let Some(instant) = parse_with_offset(&iso) {
            return Ok(Self::with_offset(instant));
        }
        if let Some(instant) = parse_naive(&iso) {
            return Ok(Self::full(instant));
        }

        let parsed = match text.split('-').collect::<Vec<_>>().as_slice() {
            [year] => decimal(year).and_then(Self::year),
            [year, month] => decimal(year)
                .zip(decimal(month).and_then(|m| u32::try_from(m).ok()))
                .and_then(|(y, m)| Self::year_month(y, m)),
            _ => None,
        };
        parsed.ok_or_else(|| DatetimeFormatError(text.to_string()))
    }

    /// Wall-clock time, local to [`Self::offset`] when there is one
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn month_known(&self) -> bool {
        self.month_known
    }

    pub fn day_known(&self) -> bool {
        self.day_known
    }

    /// Full ISO 8601 rendering, regardless of the recorded precision
    pub fn isoformat(&self) -> String {
        match self.offset {
            Some(offset) => format!("{}{offset}", iso_format(&self.instant)),
            None => iso_format(&self.instant),
        }
    }
}

impl fmt::Display for GoolabsDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_known {
            f.write_str(&self.isoformat())
        } else if self.month_known {
            write!(f, "{:04}-{:02}", self.instant.year(), self.instant.month())
        } else {
            write!(f, "{:04}", self.instant.year())
        }
    }
}

impl FromStr for GoolabsDatetime {
    type Err = DatetimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for GoolabsDatetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GoolabsDatetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// ISO 8601 with seconds, plus microseconds when they are non-zero
pub fn iso_format(instant: &NaiveDateTime) -> String {
    if instant.nanosecond() / 1_000 == 0 {
        instant.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        instant.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// `Z` stands for `+00:00`, and an hour-only time `THH` for `THH:00`
fn expand_iso(text: &str) -> Cow<'_, str> {
    let mut iso = match text.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{rest}+00:00")),
        None => Cow::Borrowed(text),
    };
    let hour_only = match (iso.as_bytes().get(10), iso.as_bytes().get(11..13)) {
        (Some(b'T' | b' '), Some(hour)) => {
            hour.iter().all(u8::is_ascii_digit)
                && !matches!(iso.as_bytes().get(13), Some(b':' | b'0'..=b'9'))
        }
        _ => false,
    };
    if hour_only {
        iso.to_mut().insert_str(13, ":00");
    }
    iso
}

fn parse_with_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(text, format).ok())
    })
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn decimal(part: &str) -> Option<i32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    if !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_year_only_round_trip() {
        let dt = GoolabsDatetime::parse("2022").unwrap();
        assert!(!dt.month_known());
        assert!(!dt.day_known());
        assert_eq!(dt.instant(), at(2022, 1, 1, 0, 0, 0));
        assert_eq!(dt.to_string(), "2022");
    }

    #[test]
    fn test_year_month_round_trip() {
        let dt = GoolabsDatetime::parse("2022-06").unwrap();
        assert!(dt.month_known());
        assert!(!dt.day_known());
        assert_eq!(dt.instant(), at(2022, 6, 1, 0, 0, 0));
        assert_eq!(dt.to_string(), "2022-06");
    }

    #[test]
    fn test_full_round_trip() {
        let dt = GoolabsDatetime::parse("2022-06-02T01:11:30").unwrap();
        assert!(dt.month_known() && dt.day_known());
        assert_eq!(dt.to_string(), "2022-06-02T01:11:30");
    }

    #[test]
    fn test_date_and_minute_precision_normalize_to_seconds() {
        let date = GoolabsDatetime::parse("2016-04-01").unwrap();
        assert_eq!(date, GoolabsDatetime::full(at(2016, 4, 1, 0, 0, 0)));
        assert_eq!(date.to_string(), "2016-04-01T00:00:00");

        let minutes = GoolabsDatetime::parse("2016-04-01T10:30").unwrap();
        assert_eq!(minutes, GoolabsDatetime::full(at(2016, 4, 1, 10, 30, 0)));
    }

    #[test]
    fn test_microseconds_are_kept() {
        let dt = GoolabsDatetime::parse("2016-04-01T10:30:00.250000").unwrap();
        assert_eq!(dt.to_string(), "2016-04-01T10:30:00.250000");
    }

    #[test]
    fn test_utc_offset_is_kept() {
        let dt = GoolabsDatetime::parse("2016-04-01T10:30:00+09:00").unwrap();
        assert_eq!(dt.instant(), at(2016, 4, 1, 10, 30, 0));
        assert_eq!(dt.offset(), FixedOffset::east_opt(9 * 3600));
        assert_eq!(dt.to_string(), "2016-04-01T10:30:00+09:00");
        assert_eq!(dt.isoformat(), "2016-04-01T10:30:00+09:00");
        assert_ne!(dt, GoolabsDatetime::full(at(2016, 4, 1, 10, 30, 0)));

        let utc = GoolabsDatetime::parse("2016-04-01T01:30:00.5Z").unwrap();
        assert_eq!(utc.offset(), FixedOffset::east_opt(0));
        assert_eq!(utc.to_string(), "2016-04-01T01:30:00.500000+00:00");

        let minutes = GoolabsDatetime::parse("2016-04-01 10:30-05:00").unwrap();
        assert_eq!(minutes.to_string(), "2016-04-01T10:30:00-05:00");
    }

    #[test]
    fn test_hour_only_time() {
        let dt = GoolabsDatetime::parse("2016-04-01T10").unwrap();
        assert_eq!(dt, GoolabsDatetime::full(at(2016, 4, 1, 10, 0, 0)));

        let dt = GoolabsDatetime::parse("2016-04-01T10+09:00").unwrap();
        assert_eq!(dt.instant(), at(2016, 4, 1, 10, 0, 0));
        assert_eq!(dt.to_string(), "2016-04-01T10:00:00+09:00");
    }

    #[test]
    fn test_rejects_other_shapes() {
        for text in [
            "",
            "June",
            "2022-13",
            "2022-06-31",
            "2022-06-01-05",
            "-2022",
            "2022-",
            "10:30",
            "0",
            "2016-04-01T1",
            "2016-04-01T25",
            "2016-04-01T10:30+9",
            "2016-04-01Z",
        ] {
            assert!(GoolabsDatetime::parse(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_precision_affects_equality() {
        let year_month = GoolabsDatetime::parse("2022-06").unwrap();
        let full = GoolabsDatetime::parse("2022-06-01").unwrap();
        assert_eq!(year_month.instant(), full.instant());
        assert_ne!(year_month, full);
    }

    #[test]
    fn test_serde_uses_goolabs_format() {
        let dt = GoolabsDatetime::parse("2015").unwrap();
        assert_eq!(serde_json::to_string(&dt).unwrap(), "\"2015\"");
        let back: GoolabsDatetime = serde_json::from_str("\"2015\"").unwrap();
        assert_eq!(back, dt);

        let aware = GoolabsDatetime::parse("2016-04-01T10:30:00+09:00").unwrap();
        let json = serde_json::to_string(&aware).unwrap();
        assert_eq!(json, "\"2016-04-01T10:30:00+09:00\"");
        assert_eq!(serde_json::from_str::<GoolabsDatetime>(&json).unwrap(), aware);
    }
}
