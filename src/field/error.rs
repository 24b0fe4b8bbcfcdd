use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors produced while JSON-encoding field values.
///
/// Display and text renderings never fail; every variant here surfaces from a
/// JSON encoding call and is returned to the caller unchanged.
#[derive(Debug, Error)]
pub enum FieldError {
	/// Value kind has no JSON representation under generic encoding.
	#[error("json: unsupported type: {kind}")]
	UnsupportedType {
		/// Kind label of the rejected value, e.g. `complex128`.
		kind: &'static str,
	},
	/// Value of a representable kind carries a non-representable value.
	#[error("json: unsupported value: {value}")]
	UnsupportedValue {
		/// Display form of the rejected value.
		value: String,
	},
	/// Map key kind cannot become a JSON object key.
	#[error("json: unsupported map key kind: {kind}")]
	MapKey {
		/// Kind label of the rejected key.
		kind: &'static str,
	},
	/// Raw payload is not well-formed JSON.
	#[error("raw json: invalid character {found} at offset {offset}: {source}")]
	MalformedRaw {
		/// Quoted description of the offending character.
		found: String,
		/// Byte offset of the offending character.
		offset: usize,
		/// Underlying parser error.
		#[source]
		source: serde_json::Error,
	},
	/// Raw payload ended before the JSON value was complete.
	#[error("raw json: unexpected end of input at offset {offset}")]
	TruncatedRaw {
		/// Payload length in bytes.
		offset: usize,
	},
	/// Raw payload is not valid UTF-8.
	#[error("raw json: invalid utf-8 at offset {offset}")]
	InvalidUtf8Raw {
		/// Length of the valid UTF-8 prefix.
		offset: usize,
	},
	/// Time value cannot be written as an RFC 3339 timestamp.
	#[error("time: year {year} outside of range [0,9999]")]
	TimeOutOfRange {
		/// Offending calendar year.
		year: i32,
	},
	/// String quoting failure from the JSON encoder.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
