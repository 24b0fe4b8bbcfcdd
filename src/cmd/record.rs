use logfield::field::{Field, LineOptions, Record, Reflect};

use crate::cmd::Result;
use crate::cmd::util::{Kind, parse_value, split_field_spec};

/// Command-line arguments.
#[derive(clap::Args)]
pub struct Args {
	/// Field as `key=value`; the value is parsed like `render --kind auto`.
	#[arg(long = "field", value_name = "KEY=VALUE")]
	pub fields: Vec<String>,
	/// Use generic structural encoding instead of static dispatch.
	#[arg(long)]
	pub reflect: bool,
	/// Print the merged JSON object instead of a display line.
	#[arg(long)]
	pub json: bool,
	/// Truncate long values in the display line.
	#[arg(long)]
	pub compact: bool,
}

/// Render all fields as one JSON object or one display line.
pub fn run(args: Args) -> Result<()> {
	let Args {
		fields,
		reflect,
		json,
		compact,
	} = args;

	let mut values: Vec<(&str, Box<dyn Reflect>)> = Vec::with_capacity(fields.len());
	for spec in &fields {
		let (key, text) = split_field_spec(spec)?;
		values.push((key, parse_value(Kind::Auto, text)?));
	}

	let mut record = Record::new();
	for (key, value) in &values {
		let field = if reflect { Field::reflect(&**value) } else { Field::any(&**value) };
		record.push(*key, field);
	}

	if json {
		println!("{}", record.to_json()?);
	} else {
		let options = if compact { LineOptions::compact() } else { LineOptions::default() };
		println!("{}", record.to_line(&options));
	}
	Ok(())
}
