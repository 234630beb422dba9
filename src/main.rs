#![allow(missing_docs)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use mofdoc::bmof::{BmofError, Result, ZstdCodec, decompile};

/// Raw container ingestion ceiling, 8 MiB.
const MAX_INPUT_BYTES: usize = 0x80_0000;

#[derive(Parser)]
#[command(name = "mofdoc", about = "Decompile WMI binary MOF containers to MOF text")]
struct Cli {
	/// Container file to read; stdin when omitted
	#[arg(value_name = "input_file")]
	input: Option<PathBuf>,
	/// File the MOF text is written to; stdout when omitted
	#[arg(value_name = "output_file")]
	output: Option<PathBuf>,
}

fn main() {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			eprint!("{err}");
			std::process::exit(1);
		}
	};

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	let raw = read_input(cli.input.as_deref())?;
	let text = decompile(&raw, &ZstdCodec)?;
	write_output(cli.output.as_deref(), &text)
}

/// Read the whole container, holding the stream to the ingestion cap.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
	let name = path.map_or_else(|| "(stdin)".to_owned(), |p| p.display().to_string());
	let limit = (MAX_INPUT_BYTES + 1) as u64;

	let mut raw = Vec::new();
	let read = match path {
		Some(path) => {
			fs::File::open(path).and_then(|file| file.take(limit).read_to_end(&mut raw))
		}
		None => io::stdin().lock().take(limit).read_to_end(&mut raw),
	};
	read.map_err(|source| BmofError::ReadInput { path: name.clone(), source })?;

	if raw.len() > MAX_INPUT_BYTES {
		return Err(BmofError::InputTooLarge { path: name, limit: MAX_INPUT_BYTES });
	}
	Ok(raw)
}

/// Write the rendered text; the output file is only ever created here,
/// after every earlier stage has succeeded.
fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
	let written = match path {
		Some(path) => fs::write(path, text),
		None => io::stdout().lock().write_all(text.as_bytes()),
	};
	written.map_err(|source| BmofError::WriteOutput {
		path: path.map_or_else(|| "(stdout)".to_owned(), |p| p.display().to_string()),
		source,
	})
}
