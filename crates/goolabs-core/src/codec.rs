//! Conversions between caller values, wire strings and enum members
//!
//! Encoders run while building a request and fail with
//! [`GoolabsError::InvalidRequest`]. Decoders run while mapping a response
//! and fail with [`GoolabsError::UnexpectedResponse`].

use crate::datetime::{iso_format, GoolabsDatetime};
use crate::error::{GoolabsError, Result};
use crate::types::WireEnum;
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Separator of filter lists on the wire
pub const FILTER_SEPARATOR: char = '|';

/// An enum argument given either as a member or as its raw wire string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumArg<E> {
    Member(E),
    Raw(String),
}

impl<E> From<&str> for EnumArg<E> {
    fn from(value: &str) -> Self {
        EnumArg::Raw(value.to_string())
    }
}

impl<E> From<String> for EnumArg<E> {
    fn from(value: String) -> Self {
        EnumArg::Raw(value)
    }
}

/// A filter argument: either an already pipe-delimited string or a list of
/// members / raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterArg<E> {
    Piped(String),
    Items(Vec<EnumArg<E>>),
}

impl<E> FilterArg<E> {
    /// True for an empty item list. A piped string is never blank here, an
    /// empty one is rejected by [`encode_filter_list`] instead.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterArg::Piped(_) => false,
            FilterArg::Items(items) => items.is_empty(),
        }
    }
}

impl<E> From<&str> for FilterArg<E> {
    fn from(value: &str) -> Self {
        FilterArg::Piped(value.to_string())
    }
}

impl<E> From<String> for FilterArg<E> {
    fn from(value: String) -> Self {
        FilterArg::Piped(value)
    }
}

impl<E, T: Into<EnumArg<E>>> From<Vec<T>> for FilterArg<E> {
    fn from(values: Vec<T>) -> Self {
        FilterArg::Items(values.into_iter().map(Into::into).collect())
    }
}

impl<E, T: Into<EnumArg<E>>, const N: usize> From<[T; N]> for FilterArg<E> {
    fn from(values: [T; N]) -> Self {
        FilterArg::Items(values.into_iter().map(Into::into).collect())
    }
}

/// A reference time given as text, or as a date-time with or without offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeArg {
    Text(String),
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl From<&str> for DateTimeArg {
    fn from(value: &str) -> Self {
        DateTimeArg::Text(value.to_string())
    }
}

impl From<String> for DateTimeArg {
    fn from(value: String) -> Self {
        DateTimeArg::Text(value)
    }
}

impl From<NaiveDateTime> for DateTimeArg {
    fn from(value: NaiveDateTime) -> Self {
        DateTimeArg::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for DateTimeArg {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateTimeArg::Aware(value)
    }
}

/// A count given as an integer or as a decimal string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountArg {
    Int(i64),
    Text(String),
}

impl From<i64> for CountArg {
    fn from(value: i64) -> Self {
        CountArg::Int(value)
    }
}

impl From<&str> for CountArg {
    fn from(value: &str) -> Self {
        CountArg::Text(value.to_string())
    }
}

impl From<String> for CountArg {
    fn from(value: String) -> Self {
        CountArg::Text(value)
    }
}

pub fn encode_enum<E: WireEnum>(
    value: Option<&EnumArg<E>>,
    required: bool,
) -> Result<Option<&'static str>> {
    match value {
        None if required => Err(GoolabsError::invalid_request(format!(
            "a {} value is required",
            E::NAME
        ))),
        None => Ok(None),
        Some(EnumArg::Member(member)) => Ok(Some(member.wire())),
        Some(EnumArg::Raw(raw)) => E::from_wire(raw).map(|m| Some(m.wire())).ok_or_else(|| {
            GoolabsError::invalid_request(format!("{raw:?} is not a legal {} value", E::NAME))
        }),
    }
}

/// Validate every segment / item and rejoin them with `|`, keeping the
/// caller's order and duplicates.
pub fn encode_filter_list<E: WireEnum>(value: Option<&FilterArg<E>>) -> Result<Option<String>> {
    let wires = match value {
        None => return Ok(None),
        Some(FilterArg::Piped(piped)) => piped
            .split(FILTER_SEPARATOR)
            .map(|segment| encode_required::<E>(&EnumArg::Raw(segment.to_string())))
            .collect::<Result<Vec<_>>>()?,
        Some(FilterArg::Items(items)) => items
            .iter()
            .map(encode_required::<E>)
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(Some(wires.join("|")))
}

fn encode_required<E: WireEnum>(value: &EnumArg<E>) -> Result<&'static str> {
    encode_enum(Some(value), true)?
        .ok_or_else(|| GoolabsError::invalid_request(format!("a {} value is required", E::NAME)))
}

/// Text must parse as a year, year-month or ISO date-time; the wire always
/// receives the full ISO form.
pub fn encode_datetime(value: Option<&DateTimeArg>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(DateTimeArg::Text(text)) => GoolabsDatetime::parse(text)
            .map(|dt| Some(dt.isoformat()))
            .map_err(|e| GoolabsError::invalid_request(e.to_string())),
        Some(DateTimeArg::Naive(instant)) => Ok(Some(iso_format(instant))),
        Some(DateTimeArg::Aware(instant)) => {
            Ok(Some(GoolabsDatetime::with_offset(*instant).isoformat()))
        }
    }
}

pub fn encode_bounded_int(value: Option<&CountArg>, min: i64, max: i64) -> Result<Option<i64>> {
    let number = match value {
        None => return Ok(None),
        Some(CountArg::Int(number)) => Some(*number),
        Some(CountArg::Text(text))
            if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) =>
        {
            text.parse::<i64>().ok()
        }
        Some(CountArg::Text(_)) => None,
    };
    match number {
        Some(n) if (min..=max).contains(&n) => Ok(Some(n)),
        _ => Err(GoolabsError::invalid_request(format!(
            "{:?} is not a whole number between {min} and {max}",
            value.map(|v| match v {
                CountArg::Int(n) => n.to_string(),
                CountArg::Text(t) => t.clone(),
            })
            .unwrap_or_default()
        ))),
    }
}

/// `None` means the API applied its default filter, which is every member.
/// The result is always in declaration order, whatever order the segments
/// were echoed in.
pub fn decode_filter_list_or_all<E: WireEnum>(raw: Option<&str>) -> Result<Vec<E>> {
    let Some(piped) = raw else {
        return Ok(E::ALL.to_vec());
    };
    let segments = piped
        .split(FILTER_SEPARATOR)
        .map(|segment| {
            E::from_wire(segment).ok_or_else(|| {
                GoolabsError::unexpected_response(format!(
                    "filter {piped:?} has a segment {segment:?} that is not a {} value",
                    E::NAME
                ))
            })
        })
        .collect::<Result<Vec<E>>>()?;
    Ok(E::ALL
        .iter()
        .copied()
        .filter(|member| segments.contains(member))
        .collect())
}

pub fn decode_enum_or_none<E: WireEnum>(raw: Option<&str>) -> Result<Option<E>> {
    match raw {
        None => Ok(None),
        Some(value) => E::from_wire(value).map(Some).ok_or_else(|| {
            GoolabsError::unexpected_response(format!("{value:?} is not a {} value", E::NAME))
        }),
    }
}
