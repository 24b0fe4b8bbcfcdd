use logfield::field::FieldError;
use thiserror::Error;

/// Single-record rendering command.
pub mod record;
/// Single-value rendering command.
pub mod render;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared argument parsing helpers.
pub(crate) mod util;

/// Command result type.
pub type Result<T> = std::result::Result<T, CmdError>;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CmdError {
	/// Argument could not be parsed as the requested kind.
	#[error("invalid {kind} value: {value}")]
	InvalidValue {
		/// Requested value kind.
		kind: &'static str,
		/// User-provided text.
		value: String,
	},
	/// `--field` argument was not `key=value`.
	#[error("invalid field spec (expected key=value): {spec}")]
	InvalidFieldSpec {
		/// User-provided text.
		spec: String,
	},
	/// Field rendering failure.
	#[error(transparent)]
	Field(#[from] FieldError),
	/// Report serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
