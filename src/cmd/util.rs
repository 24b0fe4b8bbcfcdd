use chrono::{DateTime, TimeDelta, Utc};
use logfield::field::{Complex128, RawJson, Reflect};

use crate::cmd::{CmdError, Result};

/// Value kind requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
	/// JSON literal when it parses, plain string otherwise.
	Auto,
	/// Untyped nil; the value text is ignored.
	Null,
	/// `true` or `false`.
	Bool,
	/// Signed 64-bit integer.
	Int,
	/// Unsigned 64-bit integer.
	Uint,
	/// 64-bit float.
	Float,
	/// 32-bit float.
	Float32,
	/// `re,im` pair.
	Complex,
	/// Text as given.
	String,
	/// UTF-8 bytes of the text.
	Bytes,
	/// Characters of the text.
	Runes,
	/// Signed nanosecond count.
	Duration,
	/// RFC 3339 timestamp.
	Time,
	/// Pre-serialized JSON.
	Raw,
}

/// Build an owned reflectable value of `kind` from argument text.
pub(crate) fn parse_value(kind: Kind, text: &str) -> Result<Box<dyn Reflect>> {
	let value: Box<dyn Reflect> = match kind {
		Kind::Auto => match serde_json::from_str::<serde_json::Value>(text) {
			Ok(json) => Box::new(json),
			Err(_) => Box::new(text.to_owned()),
		},
		Kind::Null => Box::new(()),
		Kind::Bool => Box::new(parse::<bool>(text, "bool")?),
		Kind::Int => Box::new(parse::<i64>(text, "int")?),
		Kind::Uint => Box::new(parse::<u64>(text, "uint")?),
		Kind::Float => Box::new(parse::<f64>(text, "float")?),
		Kind::Float32 => Box::new(parse::<f32>(text, "float32")?),
		Kind::Complex => {
			let (re, im) = text.split_once(',').ok_or_else(|| invalid("complex", text))?;
			Box::new(Complex128::new(parse(re.trim(), "complex")?, parse(im.trim(), "complex")?))
		}
		Kind::String => Box::new(text.to_owned()),
		Kind::Bytes => Box::new(text.as_bytes().to_vec()),
		Kind::Runes => Box::new(text.chars().collect::<Vec<char>>()),
		Kind::Duration => Box::new(TimeDelta::nanoseconds(parse::<i64>(text, "duration")?)),
		Kind::Time => {
			let at = DateTime::parse_from_rfc3339(text).map_err(|_| invalid("time", text))?;
			if at.offset().local_minus_utc() == 0 {
				Box::new(at.with_timezone(&Utc))
			} else {
				Box::new(at)
			}
		}
		Kind::Raw => Box::new(RawJson::new(text)),
	};
	Ok(value)
}

/// Split `key=value` at the first `=`.
pub(crate) fn split_field_spec(spec: &str) -> Result<(&str, &str)> {
	match spec.split_once('=') {
		Some((key, value)) if !key.is_empty() => Ok((key, value)),
		_ => Err(CmdError::InvalidFieldSpec { spec: spec.to_owned() }),
	}
}

fn parse<T: std::str::FromStr>(text: &str, kind: &'static str) -> Result<T> {
	text.parse::<T>().map_err(|_| invalid(kind, text))
}

fn invalid(kind: &'static str, text: &str) -> CmdError {
	CmdError::InvalidValue {
		kind,
		value: text.to_owned(),
	}
}
