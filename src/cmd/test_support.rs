use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::LazyLock;

static LOGFIELD: LazyLock<PathBuf> = LazyLock::new(|| logfield_testkit::binary("logfield"));

pub(crate) fn run_logfield(args: &[&str]) -> Output {
	Command::new(&*LOGFIELD).args(args).output().expect("logfield runs")
}

pub(crate) fn run_logfield_json(args: &[&str]) -> serde_json::Value {
	let output = run_logfield(args);
	assert!(
		output.status.success(),
		"logfield {args:?} exited with {}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	logfield_testkit::parse_json(&String::from_utf8_lossy(&output.stdout))
}
