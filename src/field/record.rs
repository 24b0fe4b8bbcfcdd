use std::borrow::Cow;

use crate::field::render::{escape_control, quote_json};
use crate::field::{Field, Result};

/// Formatting limits for the display line of a record.
#[derive(Debug, Clone, Copy)]
pub struct LineOptions {
	/// Quote values that contain whitespace, quotes or `=`.
	pub quote_values: bool,
	/// Maximum number of Unicode scalar values printed per value.
	pub max_value_len: usize,
}

impl Default for LineOptions {
	fn default() -> Self {
		Self {
			quote_values: true,
			max_value_len: 4096,
		}
	}
}

impl LineOptions {
	/// Preset for terminal output.
	pub fn compact() -> Self {
		Self {
			quote_values: true,
			max_value_len: 80,
		}
	}
}

/// Ordered set of named fields belonging to one log call.
#[derive(Debug, Default)]
pub struct Record<'a> {
	fields: Vec<(Cow<'a, str>, Field<'a>)>,
}

impl<'a> Record<'a> {
	/// Create an empty record.
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Append a field, keeping insertion order.
	pub fn push(&mut self, key: impl Into<Cow<'a, str>>, field: Field<'a>) -> &mut Self {
		self.fields.push((key.into(), field));
		self
	}

	/// Builder form of [`Record::push`].
	pub fn with(mut self, key: impl Into<Cow<'a, str>>, field: Field<'a>) -> Self {
		self.push(key, field);
		self
	}

	/// Fields in insertion order.
	pub fn fields(&self) -> &[(Cow<'a, str>, Field<'a>)] {
		&self.fields
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether no field has been pushed.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Merge every field's JSON rendering into one object.
	///
	/// The first failing field aborts the merge and its error is returned
	/// unchanged.
	pub fn to_json(&self) -> Result<String> {
		let mut out = String::from("{");
		for (idx, (key, field)) in self.fields.iter().enumerate() {
			if idx > 0 {
				out.push(',');
			}
			out.push_str(&quote_json(key)?);
			out.push(':');
			out.push_str(&field.to_json()?);
		}
		out.push('}');
		Ok(out)
	}

	/// Render `key=value` pairs separated by spaces.
	pub fn to_line(&self, options: &LineOptions) -> String {
		let mut parts = Vec::with_capacity(self.fields.len());
		for (key, field) in &self.fields {
			let value = truncate(&escape_control(&field.to_display()), options.max_value_len);
			let value = if options.quote_values && needs_quotes(&value) { quote_display(&value) } else { value };
			parts.push(format!("{key}={value}"));
		}
		parts.join(" ")
	}
}

fn needs_quotes(value: &str) -> bool {
	value.is_empty() || value.chars().any(|ch| ch.is_whitespace() || ch == '"' || ch == '=')
}

fn quote_display(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for ch in value.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
