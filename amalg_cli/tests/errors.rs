use amalg_core::AnyEmptyResult;
use assert_cmd::Command;
use similar_asserts::assert_eq;

#[test]
fn missing_source_directory_argument_prints_usage() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.assert()
		.failure()
		.stderr(predicates::str::contains("Usage"));

	Ok(())
}

#[test]
fn missing_manifest_is_a_fatal_error() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;

	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.arg(src.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("no manifest found"));

	Ok(())
}

#[test]
fn invalid_manifest_toml_is_a_fatal_error() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	std::fs::write(src.path().join("amalg.toml"), "sources = \"not-a-list\"\n")?;

	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.arg(src.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("failed to parse manifest"));

	Ok(())
}

#[test]
fn missing_include_target_is_a_fatal_error() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let out = tempfile::tempdir()?;

	std::fs::write(src.path().join("a.h"), "X\n")?;
	std::fs::write(src.path().join("a.c"), "#include \"gone.h\"\nY\n")?;
	std::fs::write(
		src.path().join("amalg.toml"),
		"sources = [\"a.c\"]\nroot_header = \"a.h\"\n",
	)?;

	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.arg(src.path())
		.arg("--out-dir")
		.arg(out.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("include target not found"));

	Ok(())
}

#[test]
fn unterminated_include_is_a_fatal_error() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let out = tempfile::tempdir()?;

	std::fs::write(src.path().join("a.h"), "X\n")?;
	std::fs::write(src.path().join("a.c"), "before\n#include \"a.h")?;
	std::fs::write(
		src.path().join("amalg.toml"),
		"sources = [\"a.c\"]\nroot_header = \"a.h\"\n",
	)?;

	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.arg(src.path())
		.arg("--out-dir")
		.arg(out.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("unterminated quoted include"));

	// The artifact is left truncated at the flushed prefix; the tool is
	// re-run after the tree is fixed.
	let partial = std::fs::read_to_string(out.path().join("amalgamated.c"))?;
	assert_eq!(partial, "before\n");

	Ok(())
}

#[test]
fn max_includes_override_caps_the_pass() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let out = tempfile::tempdir()?;

	std::fs::write(src.path().join("a.h"), "A\n")?;
	std::fs::write(src.path().join("b.h"), "B\n")?;
	std::fs::write(
		src.path().join("a.c"),
		"#include \"a.h\"\n#include \"b.h\"\n",
	)?;
	std::fs::write(
		src.path().join("amalg.toml"),
		"sources = [\"a.c\"]\nroot_header = \"a.h\"\n",
	)?;

	let mut cmd = Command::cargo_bin("amalg")?;
	cmd.env("NO_COLOR", "1")
		.arg(src.path())
		.arg("--max-includes")
		.arg("1")
		.arg("--out-dir")
		.arg(out.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("distinct include limit exceeded"));

	Ok(())
}
