//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Path of a workspace binary.
///
/// Uses the path cargo exports to integration tests and builds the binary
/// otherwise, since unit tests do not get that variable.
pub fn binary(name: &str) -> PathBuf {
	if let Some(path) = std::env::var_os(format!("CARGO_BIN_EXE_{name}")) {
		return PathBuf::from(path);
	}

	let built = Command::new("cargo")
		.current_dir(workspace_root())
		.args(["build", "--quiet", "--bin", name])
		.status()
		.is_ok_and(|status| status.success());
	assert!(built, "cargo could not build binary `{name}`");

	let mut path = target_dir().join("debug").join(name);
	path.set_extension(std::env::consts::EXE_EXTENSION);
	path
}

/// Parse rendered JSON, panicking with the offending text on failure.
pub fn parse_json(rendered: &str) -> serde_json::Value {
	serde_json::from_str(rendered).unwrap_or_else(|err| panic!("rendered output is not valid JSON ({err}): {rendered}"))
}

/// Assert that `rendered` parses to the same JSON value as `expected`.
pub fn assert_json_eq(rendered: &str, expected: serde_json::Value) {
	assert_eq!(parse_json(rendered), expected, "rendered JSON: {rendered}");
}
