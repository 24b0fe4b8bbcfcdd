#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "logfield", about = "Structured-log field rendering tools")]
struct Cli {
	/// Log debug diagnostics to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render one value as display, text and JSON.
	Render(cmd::render::Args),
	/// Render several `key=value` fields as one record.
	Record(cmd::record::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> cmd::Result<()> {
	match cli.command {
		Commands::Render(args) => cmd::render::run(args),
		Commands::Record(args) => cmd::record::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
