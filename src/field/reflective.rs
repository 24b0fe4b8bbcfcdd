//! Generic structural rendering driven by [`Reflect`].
//!
//! Kind-specific meaning is deliberately absent here: byte slices are
//! base64 like any slice of 8-bit integers, durations are their nanosecond
//! integers unless their own display method applies, and complex numbers have
//! no JSON form. Only the [`Reflect`] hooks can change that.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::field::render::{format_f32, format_f64, quote_json};
use crate::field::{FieldError, Reflect, ReflectRef, Result};

/// Display form of a resolved value.
pub fn display(value: &dyn Reflect) -> String {
	let mut out = String::new();
	write_display(&mut out, value);
	out
}

/// Text encoding of a resolved value: the display form, except that byte
/// slices without a display method become base64.
pub fn text(value: &dyn Reflect) -> String {
	if value.reflect_display().is_none()
		&& let ReflectRef::Bytes(bytes) = value.reflect_ref()
	{
		return STANDARD.encode(bytes);
	}
	display(value)
}

/// JSON encoding of a resolved value.
pub fn json(value: &dyn Reflect) -> Result<String> {
	let mut out = String::new();
	write_json(&mut out, value)?;
	Ok(out)
}

fn write_display(out: &mut String, value: &dyn Reflect) {
	if let Some(custom) = value.reflect_display() {
		out.push_str(&custom);
		return;
	}

	match value.reflect_ref() {
		ReflectRef::Nil | ReflectRef::Pointer(None) => out.push_str("<nil>"),
		ReflectRef::Pointer(Some(next)) => write_display(out, next),
		ReflectRef::Bool(v) => out.push_str(if v { "true" } else { "false" }),
		ReflectRef::Int(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::Uint(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::Float32(v) => out.push_str(&format_f32(v)),
		ReflectRef::Float64(v) => out.push_str(&format_f64(v)),
		ReflectRef::Complex64(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::Complex128(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::String(v) => out.push_str(v),
		ReflectRef::Bytes(bytes) => {
			out.push('[');
			for (idx, byte) in bytes.iter().enumerate() {
				if idx > 0 {
					out.push(' ');
				}
				let _ = write!(out, "{byte}");
			}
			out.push(']');
		}
		ReflectRef::List(items) | ReflectRef::Array(items) => {
			out.push('[');
			for (idx, item) in items.into_iter().enumerate() {
				if idx > 0 {
					out.push(' ');
				}
				write_display(out, item);
			}
			out.push(']');
		}
		ReflectRef::Map(entries) => {
			let mut rendered: Vec<(String, String)> = entries.into_iter().map(|(key, value)| (display(key), display(value))).collect();
			rendered.sort();
			out.push_str("map[");
			for (idx, (key, value)) in rendered.iter().enumerate() {
				if idx > 0 {
					out.push(' ');
				}
				let _ = write!(out, "{key}:{value}");
			}
			out.push(']');
		}
		ReflectRef::Struct(fields) => {
			out.push('{');
			for (idx, (_, item)) in fields.into_iter().enumerate() {
				if idx > 0 {
					out.push(' ');
				}
				write_display(out, item);
			}
			out.push('}');
		}
	}
}

fn write_json(out: &mut String, value: &dyn Reflect) -> Result<()> {
	if let Some(custom) = value.reflect_json() {
		out.push_str(&custom?);
		return Ok(());
	}

	match value.reflect_ref() {
		ReflectRef::Nil | ReflectRef::Pointer(None) => out.push_str("null"),
		ReflectRef::Pointer(Some(next)) => write_json(out, next)?,
		ReflectRef::Bool(v) => out.push_str(if v { "true" } else { "false" }),
		ReflectRef::Int(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::Uint(v) => {
			let _ = write!(out, "{v}");
		}
		ReflectRef::Float32(v) => out.push_str(&finite(v.is_finite(), format_f32(v))?),
		ReflectRef::Float64(v) => out.push_str(&finite(v.is_finite(), format_f64(v))?),
		ReflectRef::Complex64(_) => return Err(FieldError::UnsupportedType { kind: "complex64" }),
		ReflectRef::Complex128(_) => return Err(FieldError::UnsupportedType { kind: "complex128" }),
		ReflectRef::String(v) => out.push_str(&quote_json(v)?),
		ReflectRef::Bytes(bytes) => out.push_str(&quote_json(&STANDARD.encode(bytes))?),
		ReflectRef::List(items) | ReflectRef::Array(items) => {
			out.push('[');
			for (idx, item) in items.into_iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				write_json(out, item)?;
			}
			out.push(']');
		}
		ReflectRef::Map(entries) => {
			let mut keyed = Vec::with_capacity(entries.len());
			for (key, item) in entries {
				keyed.push((map_key(key)?, item));
			}
			keyed.sort_by(|a, b| a.0.cmp(&b.0));
			out.push('{');
			for (idx, (key, item)) in keyed.into_iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				out.push_str(&quote_json(&key)?);
				out.push(':');
				write_json(out, item)?;
			}
			out.push('}');
		}
		ReflectRef::Struct(fields) => {
			out.push('{');
			for (idx, (name, item)) in fields.into_iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				out.push_str(&quote_json(name)?);
				out.push(':');
				write_json(out, item)?;
			}
			out.push('}');
		}
	}
	Ok(())
}

fn finite(is_finite: bool, rendered: String) -> Result<String> {
	if is_finite { Ok(rendered) } else { Err(FieldError::UnsupportedValue { value: rendered }) }
}

// Object keys come from strings and integers only.
fn map_key(key: &dyn Reflect) -> Result<String> {
	match key.reflect_ref() {
		ReflectRef::String(v) => Ok(v.to_owned()),
		ReflectRef::Int(v) => Ok(v.to_string()),
		ReflectRef::Uint(v) => Ok(v.to_string()),
		other => Err(FieldError::MapKey { kind: other.kind_name() }),
	}
}

#[cfg(test)]
mod tests;
