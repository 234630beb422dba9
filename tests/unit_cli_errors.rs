#![allow(missing_docs)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

#[test]
fn help_prints_usage_to_stderr_and_exits_one() {
	for flag in ["-h", "--help"] {
		let output = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
			.arg(flag)
			.output()
			.expect("command executes");
		assert_eq!(output.status.code(), Some(1), "{flag} should exit 1");
		assert!(output.stdout.is_empty(), "help must not reach stdout");
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("Usage: mofdoc"), "missing usage line: {stderr}");
	}
}

#[test]
fn extra_arguments_exit_one_with_usage() {
	let output = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.args(["a.bmof", "b.mof", "c.mof"])
		.output()
		.expect("command executes");
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Usage: mofdoc"), "missing usage line: {stderr}");
}

#[test]
fn bad_magic_reports_invalid_input_and_creates_no_output_file() {
	let mut raw = Vec::new();
	raw.extend_from_slice(b"MOFB");
	raw.extend_from_slice(&1_u32.to_le_bytes());
	raw.extend_from_slice(&1_u32.to_le_bytes());
	raw.extend_from_slice(&0_u32.to_le_bytes());
	raw.push(0);

	let input = tmp_path("bad_magic_in.bmof");
	let dest = tmp_path("bad_magic_out.mof");
	std::fs::write(&input, &raw).expect("input file writes");

	let output = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.arg(&input)
		.arg(&dest)
		.output()
		.expect("command executes");
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: Invalid input"), "unexpected stderr: {stderr}");
	assert!(!dest.exists(), "failed runs must not create the output file");
}

#[test]
fn truncated_container_is_invalid_input() {
	let output = run_with_stdin(&[0x46, 0x4F, 0x4D, 0x42, 1, 0]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: Invalid input"), "unexpected stderr: {stderr}");
}

#[test]
fn undecodable_payload_reports_decompress_failed() {
	let mut raw = Vec::new();
	raw.extend_from_slice(b"FOMB");
	raw.extend_from_slice(&1_u32.to_le_bytes());
	raw.extend_from_slice(&4_u32.to_le_bytes());
	raw.extend_from_slice(&16_u32.to_le_bytes());
	raw.extend_from_slice(&[0xAA; 4]);

	let output = run_with_stdin(&raw);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: Decompress failed"), "unexpected stderr: {stderr}");
}

#[test]
fn oversized_input_is_rejected_before_parsing() {
	let output = run_with_stdin(&vec![0_u8; 0x80_0001]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("larger than"), "unexpected stderr: {stderr}");
}

#[test]
fn input_at_the_size_ceiling_passes_the_gate() {
	let output = run_with_stdin(&vec![0_u8; 0x80_0000]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: Invalid input"), "unexpected stderr: {stderr}");
	assert!(!stderr.contains("larger than"), "ceiling input must reach the parser: {stderr}");
}

#[test]
fn missing_input_file_reports_the_path() {
	let input = tmp_path("does_not_exist.bmof");
	let output = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.arg(&input)
		.output()
		.expect("command executes");
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("cannot read input"), "unexpected stderr: {stderr}");
	assert!(stderr.contains("does_not_exist.bmof"), "unexpected stderr: {stderr}");
}

fn run_with_stdin(stdin_bytes: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin handle")
		.write_all(stdin_bytes)
		.expect("stdin accepts input");
	child.wait_with_output().expect("command executes")
}

fn tmp_path(name: &str) -> std::path::PathBuf {
	Path::new(env!("CARGO_TARGET_TMPDIR")).join(name)
}
