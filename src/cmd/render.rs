use serde::Serialize;

use logfield::field::Field;

use crate::cmd::Result;
use crate::cmd::util::{Kind, parse_value};

/// Command-line arguments.
#[derive(clap::Args)]
pub struct Args {
	/// Value text; omitted means nil.
	pub value: Option<String>,
	/// How to interpret the value text.
	#[arg(long, value_enum, default_value_t = Kind::Auto)]
	pub kind: Kind,
	/// Use generic structural encoding instead of static dispatch.
	#[arg(long)]
	pub reflect: bool,
	/// Print the renderings as one JSON report.
	#[arg(long)]
	pub json: bool,
}

/// The three renderings of one field.
#[derive(Debug, Serialize)]
pub struct RenderReport {
	/// Display string.
	pub display: String,
	/// Text encoding.
	pub text: String,
	/// JSON encoding, absent when it failed.
	pub json: Option<String>,
	/// JSON encoding failure message.
	pub error: Option<String>,
}

/// Render one value and print its display, text and JSON forms.
pub fn run(args: Args) -> Result<()> {
	let Args { value, kind, reflect, json } = args;

	let kind = if value.is_none() { Kind::Null } else { kind };
	let value = parse_value(kind, value.as_deref().unwrap_or_default())?;
	let field = if reflect { Field::reflect(&*value) } else { Field::any(&*value) };
	let report = report(&field);

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("display: {}", report.display);
	println!("text: {}", report.text);
	match field.to_json() {
		Ok(rendered) => println!("json: {rendered}"),
		Err(err) => return Err(err.into()),
	}
	Ok(())
}

/// Collect all renderings, keeping a JSON failure as a message.
pub fn report(field: &Field<'_>) -> RenderReport {
	let (json, error) = match field.to_json() {
		Ok(rendered) => (Some(rendered), None),
		Err(err) => (None, Some(err.to_string())),
	};
	RenderReport {
		display: field.to_display(),
		text: field.to_text(),
		json,
		error,
	}
}
