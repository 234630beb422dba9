#![allow(missing_docs)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

#[test]
fn stdin_to_stdout_decompiles_a_container() {
	let mut stream = Vec::new();
	put_class_header(&mut stream, "Demo", None);
	put_u32(&mut stream, 0);
	put_u32(&mut stream, 0);

	let output = run_with_stdin(&[], &container(&stream));
	assert!(output.status.success(), "decompile should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout), "class Demo {\n};\n");
	assert!(output.stderr.is_empty(), "no diagnostics expected");
}

#[test]
fn empty_document_produces_empty_output() {
	let output = run_with_stdin(&[], &container(b""));
	assert!(output.status.success(), "empty documents are valid");
	assert!(output.stdout.is_empty(), "nothing to print");
}

#[test]
fn file_to_file_writes_exact_bytes() {
	let mut stream = Vec::new();
	put_class_header(&mut stream, "Disk", Some("CIM_LogicalDevice"));
	put_u32(&mut stream, 1);
	put_str(&mut stream, "Size");
	stream.push(0);
	stream.push(4);
	put_u32(&mut stream, 0);
	put_u32(&mut stream, 1);
	put_str(&mut stream, "Reset");
	put_u32(&mut stream, 0);
	stream.push(1);
	stream.push(0);
	stream.push(3);
	put_u32(&mut stream, 0);

	let input = tmp_path("roundtrip_in.bmof");
	let dest = tmp_path("roundtrip_out.mof");
	std::fs::write(&input, container(&stream)).expect("input file writes");

	let output = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.arg(&input)
		.arg(&dest)
		.output()
		.expect("command executes");
	assert!(output.status.success(), "decompile should succeed");
	assert!(output.stdout.is_empty(), "file mode should not print to stdout");

	let text = std::fs::read_to_string(&dest).expect("output file reads");
	assert_eq!(
		text,
		"class Disk : CIM_LogicalDevice {\n  uint32 Size;\n\n  sint32 Reset();\n};\n",
	);
}

fn run_with_stdin(args: &[&str], stdin_bytes: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_mofdoc"))
		.args(args)
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

/// Wrap a class stream in a valid container: `FOMB`, version 1, exact
/// payload length, true decompressed length.
fn container(stream: &[u8]) -> Vec<u8> {
	let packed = zstd::bulk::compress(stream, 0).expect("stream compresses");
	let mut raw = Vec::new();
	raw.extend_from_slice(b"FOMB");
	put_u32(&mut raw, 1);
	put_u32(&mut raw, packed.len() as u32);
	put_u32(&mut raw, stream.len() as u32);
	raw.extend_from_slice(&packed);
	raw
}

/// Class record prelude: name, no namespace, optional superclass, zero
/// flags, empty qualifier list.
fn put_class_header(buf: &mut Vec<u8>, name: &str, superclass: Option<&str>) {
	buf.push(1);
	put_str(buf, name);
	buf.push(0);
	match superclass {
		Some(superclass) => {
			buf.push(1);
			put_str(buf, superclass);
		}
		None => buf.push(0),
	}
	put_u32(buf, 0);
	put_u32(buf, 0);
}

fn put_str(buf: &mut Vec<u8>, s: &str) {
	put_u32(buf, s.len() as u32);
	buf.extend_from_slice(s.as_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
	buf.extend_from_slice(&v.to_le_bytes());
}

fn tmp_path(name: &str) -> std::path::PathBuf {
	Path::new(env!("CARGO_TARGET_TMPDIR")).join(name)
}
