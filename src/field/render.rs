//! Canonical display, text and JSON forms of statically known values.
//!
//! These are the primitives every dedicated constructor and the static
//! dispatch path share, so the same value renders byte-identically no matter
//! which constructor wrapped it.

use std::fmt::Write as _;

use chrono::{Datelike, Timelike};

use crate::field::value::{Timestamp, Value};
use crate::field::{FieldError, Result};

const NANOS_PER_SEC: u64 = 1_000_000_000;

impl Value {
	/// Human-readable display string.
	pub fn to_display(&self) -> String {
		match self {
			Value::Null => "null".to_owned(),
			Value::Bool(v) => v.to_string(),
			Value::I64(v) => v.to_string(),
			Value::U64(v) => v.to_string(),
			Value::F32(v) => format_f32(*v),
			Value::F64(v) => format_f64(*v),
			Value::Complex64(v) => v.to_string(),
			Value::Complex128(v) => v.to_string(),
			Value::Bytes(v) => escape_control(&String::from_utf8_lossy(v)),
			Value::Runes(v) => escape_control(&v.iter().collect::<String>()),
			Value::String(v) | Value::Error(v) => escape_control(v),
			Value::Time(v) => format_rfc3339(v),
			Value::Duration(v) => format_duration(*v),
		}
	}

	/// Text encoding; equal to the display string for every static kind.
	pub fn to_text(&self) -> String {
		self.to_display()
	}

	/// JSON encoding.
	pub fn to_json(&self) -> Result<String> {
		match self {
			Value::Null => Ok("null".to_owned()),
			Value::Bool(_) | Value::I64(_) | Value::U64(_) => Ok(self.to_display()),
			Value::F32(v) if v.is_finite() => Ok(format_f32(*v)),
			Value::F64(v) if v.is_finite() => Ok(format_f64(*v)),
			Value::F32(_) | Value::F64(_) => quote_json(&self.to_display()),
			Value::Complex64(v) => quote_json(&v.bare()),
			Value::Complex128(v) => quote_json(&v.bare()),
			Value::Bytes(v) => quote_json(&String::from_utf8_lossy(v)),
			Value::Runes(v) => quote_json(&v.iter().collect::<String>()),
			Value::String(v) | Value::Error(v) => quote_json(v),
			Value::Time(v) => quote_json(&format_rfc3339(check_year(v)?)),
			Value::Duration(v) => quote_json(&format_duration(*v)),
		}
	}
}

/// Quote text as a JSON string.
///
/// Control characters use JSON escapes (NUL becomes `\u0000`), quotes and
/// backslashes are escaped, and other non-ASCII text stays raw UTF-8.
pub fn quote_json(input: &str) -> Result<String> {
	Ok(serde_json::to_string(input)?)
}

/// Escape control characters for display, leaving everything else verbatim.
pub fn escape_control(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() => {
				let _ = write!(out, "\\u{:04x}", c as u32);
			}
			c => out.push(c),
		}
	}
	out
}

/// Shortest round-trip rendering of an `f64`.
pub fn format_f64(value: f64) -> String {
	if let Some(special) = non_finite(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
		return special.to_owned();
	}
	let abs = value.abs();
	if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
		signed_exponent(format!("{value:e}"))
	} else {
		format!("{value}")
	}
}

/// Shortest round-trip rendering of an `f32`, using `f32` precision.
pub fn format_f32(value: f32) -> String {
	if let Some(special) = non_finite(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
		return special.to_owned();
	}
	let abs = value.abs();
	if abs != 0.0 && !(1e-6_f32..1e21_f32).contains(&abs) {
		signed_exponent(format!("{value:e}"))
	} else {
		format!("{value}")
	}
}

fn non_finite(nan: bool, infinite: bool, negative: bool) -> Option<&'static str> {
	match (nan, infinite, negative) {
		(true, _, _) => Some("NaN"),
		(false, true, false) => Some("+Inf"),
		(false, true, true) => Some("-Inf"),
		_ => None,
	}
}

// `1e21` -> `1e+21`; negative exponents are already signed.
fn signed_exponent(mut rendered: String) -> String {
	if let Some(idx) = rendered.find('e')
		&& !rendered[idx + 1..].starts_with('-')
	{
		rendered.insert(idx + 1, '+');
	}
	rendered
}

/// Render a signed nanosecond count as `1h2m3.5s`, `1.5µs`, `42ns`, `0s`.
pub fn format_duration(nanos: i64) -> String {
	if nanos == 0 {
		return "0s".to_owned();
	}

	let mut out = String::new();
	if nanos < 0 {
		out.push('-');
	}
	let abs = nanos.unsigned_abs();

	if abs < NANOS_PER_SEC {
		let (scale, unit) = match abs {
			0..1_000 => (1, "ns"),
			1_000..1_000_000 => (1_000, "µs"),
			_ => (1_000_000, "ms"),
		};
		push_scaled(&mut out, abs, scale);
		out.push_str(unit);
		return out;
	}

	let secs = abs / NANOS_PER_SEC;
	let hours = secs / 3600;
	let minutes = (secs / 60) % 60;
	if hours > 0 {
		let _ = write!(out, "{hours}h");
	}
	if hours > 0 || minutes > 0 {
		let _ = write!(out, "{minutes}m");
	}
	push_scaled(&mut out, (secs % 60) * NANOS_PER_SEC + abs % NANOS_PER_SEC, NANOS_PER_SEC);
	out.push('s');
	out
}

// Writes `value / scale` with the remainder as trimmed decimal digits.
fn push_scaled(out: &mut String, value: u64, scale: u64) {
	let _ = write!(out, "{}", value / scale);
	let frac = value % scale;
	if frac == 0 {
		return;
	}
	let width = scale.ilog10() as usize;
	let digits = format!("{frac:0width$}");
	out.push('.');
	out.push_str(digits.trim_end_matches('0'));
}

/// RFC 3339 timestamp with trimmed fractional seconds and `Z` for UTC.
pub fn format_rfc3339(value: &Timestamp) -> String {
	let at = value.at;
	let mut out = at.format("%Y-%m-%dT%H:%M:%S").to_string();
	push_fraction(&mut out, at.nanosecond());
	let offset = at.offset().local_minus_utc();
	if offset == 0 {
		out.push('Z');
	} else {
		push_offset(&mut out, offset, true);
	}
	out
}

/// Verbose timestamp: date, time, fractional seconds, offset and zone name.
pub fn format_verbose(value: &Timestamp) -> String {
	let at = value.at;
	let mut out = at.format("%Y-%m-%d %H:%M:%S").to_string();
	push_fraction(&mut out, at.nanosecond());
	let offset = at.offset().local_minus_utc();
	out.push(' ');
	push_offset(&mut out, offset, false);
	out.push(' ');
	match &value.zone {
		Some(zone) => out.push_str(zone),
		None => push_offset(&mut out, offset, false),
	}
	out
}

/// Reject years that an RFC 3339 JSON timestamp cannot carry.
pub fn check_year(value: &Timestamp) -> Result<&Timestamp> {
	let year = value.at.year();
	if !(0..=9999).contains(&year) {
		return Err(FieldError::TimeOutOfRange { year });
	}
	Ok(value)
}

fn push_fraction(out: &mut String, nanos: u32) {
	let nanos = u64::from(nanos) % NANOS_PER_SEC;
	if nanos == 0 {
		return;
	}
	let digits = format!("{nanos:09}");
	out.push('.');
	out.push_str(digits.trim_end_matches('0'));
}

fn push_offset(out: &mut String, offset_secs: i32, colon: bool) {
	let sign = if offset_secs < 0 { '-' } else { '+' };
	let minutes = offset_secs.unsigned_abs() / 60;
	if colon {
		let _ = write!(out, "{sign}{:02}:{:02}", minutes / 60, minutes % 60);
	} else {
		let _ = write!(out, "{sign}{:02}{:02}", minutes / 60, minutes % 60);
	}
}
