use serde::de::IgnoredAny;
use serde_json::error::Category;
use tracing::debug;

use crate::field::{FieldError, Reflect, ReflectRef, Result};

/// Pre-serialized JSON bytes, embedded without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawJson(Vec<u8>);

impl RawJson {
	/// Wrap bytes the caller promises are JSON.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	/// Wrapped bytes, unvalidated.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}
}

impl From<&str> for RawJson {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

// Generic encoding sees a byte slice, but the JSON method still embeds.
impl Reflect for RawJson {
	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Bytes(&self.0)
	}

	fn reflect_json(&self) -> Option<Result<String>> {
		Some(embed(&self.0))
	}
}

/// Validate `bytes` as one JSON value and return it with insignificant
/// whitespace removed.
pub fn embed(bytes: &[u8]) -> Result<String> {
	let text = std::str::from_utf8(bytes).map_err(|err| FieldError::InvalidUtf8Raw { offset: err.valid_up_to() })?;
	serde_json::from_str::<IgnoredAny>(text).map_err(|err| malformed(bytes, err))?;
	Ok(compact(text))
}

fn malformed(bytes: &[u8], err: serde_json::Error) -> FieldError {
	if err.classify() == Category::Eof {
		debug!(len = bytes.len(), "raw json payload truncated");
		return FieldError::TruncatedRaw { offset: bytes.len() };
	}

	let mut offset = byte_offset(bytes, err.line(), err.column());
	if in_string_literal(&err)
		&& let Some(fault) = string_fault(bytes)
		&& fault <= offset + 1
	{
		offset = fault;
	}
	let found = match bytes.get(offset) {
		Some(byte) => describe_byte(*byte),
		None => "end of input".to_owned(),
	};
	debug!(offset, found = %found, "raw json payload rejected");
	FieldError::MalformedRaw { found, offset, source: err }
}

// Parser positions are 1-based line/column pairs.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
	let line_start = if line <= 1 {
		0
	} else {
		bytes
			.iter()
			.enumerate()
			.filter(|(_, byte)| **byte == b'\n')
			.nth(line - 2)
			.map_or(0, |(idx, _)| idx + 1)
	};
	(line_start + column.saturating_sub(1)).min(bytes.len())
}

// The parser reports string errors at the byte before the fault or inside
// the escape sequence.
fn in_string_literal(err: &serde_json::Error) -> bool {
	let message = err.to_string();
	message.contains("while parsing a string") || message.contains("escape")
}

// First byte inside a string literal that JSON does not allow there.
fn string_fault(bytes: &[u8]) -> Option<usize> {
	let mut in_string = false;
	let mut idx = 0;
	while idx < bytes.len() {
		let byte = bytes[idx];
		if !in_string {
			in_string = byte == b'"';
		} else if byte == b'"' {
			in_string = false;
		} else if byte < 0x20 {
			return Some(idx);
		} else if byte == b'\\' {
			idx += 1;
			match bytes.get(idx)? {
				b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {}
				b'u' => {
					for _ in 0..4 {
						idx += 1;
						if !bytes.get(idx)?.is_ascii_hexdigit() {
							return Some(idx);
						}
					}
				}
				_ => return Some(idx),
			}
		}
		idx += 1;
	}
	None
}

fn describe_byte(byte: u8) -> String {
	if byte.is_ascii_graphic() || byte == b' ' {
		format!("'{}'", char::from(byte))
	} else {
		format!("'\\x{byte:02x}'")
	}
}

fn compact(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut in_string = false;
	let mut escaped = false;
	for ch in text.chars() {
		if in_string {
			out.push(ch);
			if escaped {
				escaped = false;
			} else if ch == '\\' {
				escaped = true;
			} else if ch == '"' {
				in_string = false;
			}
			continue;
		}
		match ch {
			' ' | '\t' | '\n' | '\r' => {}
			'"' => {
				in_string = true;
				out.push(ch);
			}
			_ => out.push(ch),
		}
	}
	out
}
