use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Utc};

use crate::field::complex::{Complex64, Complex128};

/// Fully resolved value of one statically known kind.
///
/// Produced by the dedicated constructors and by the static dispatch; owns
/// a snapshot of the wrapped data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean.
	Bool(bool),
	/// Any signed integer width.
	I64(i64),
	/// Any unsigned integer width.
	U64(u64),
	/// Single-precision float, formatted at `f32` precision.
	F32(f32),
	/// Double-precision float.
	F64(f64),
	/// Complex number with `f32` parts.
	Complex64(Complex64),
	/// Complex number with `f64` parts.
	Complex128(Complex128),
	/// Bytes rendered as UTF-8 text.
	Bytes(Vec<u8>),
	/// Unicode scalar values rendered as text.
	Runes(Vec<char>),
	/// Text.
	String(Box<str>),
	/// Error message.
	Error(Box<str>),
	/// Point in time.
	Time(Timestamp),
	/// Signed nanosecond count.
	Duration(i64),
}

/// Instant with a fixed UTC offset and an optional zone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
	/// Wall clock time and offset.
	pub at: DateTime<FixedOffset>,
	/// Zone abbreviation; `None` prints the numeric offset instead.
	pub zone: Option<Box<str>>,
}

impl Timestamp {
	/// Attach a zone abbreviation such as `CET`.
	pub fn with_zone(at: DateTime<FixedOffset>, zone: impl Into<Box<str>>) -> Self {
		Self { at, zone: Some(zone.into()) }
	}
}

impl From<DateTime<Utc>> for Timestamp {
	fn from(value: DateTime<Utc>) -> Self {
		Self {
			at: value.fixed_offset(),
			zone: Some("UTC".into()),
		}
	}
}

impl From<DateTime<FixedOffset>> for Timestamp {
	fn from(value: DateTime<FixedOffset>) -> Self {
		Self { at: value, zone: None }
	}
}

impl From<SystemTime> for Timestamp {
	fn from(value: SystemTime) -> Self {
		DateTime::<Utc>::from(value).into()
	}
}

/// Saturating nanosecond count of a standard duration.
pub fn std_duration_nanos(value: std::time::Duration) -> i64 {
	i64::try_from(value.as_nanos()).unwrap_or(i64::MAX)
}

/// Saturating nanosecond count of a signed chrono duration.
pub fn time_delta_nanos(value: chrono::TimeDelta) -> i64 {
	value
		.num_nanoseconds()
		.unwrap_or(if value < chrono::TimeDelta::zero() { i64::MIN } else { i64::MAX })
}
