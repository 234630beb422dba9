use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BmofError>;

/// The specific header check a container failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFault {
	/// Buffer too short to hold the 16-byte header plus payload.
	Truncated {
		/// Actual buffer length.
		len: usize,
	},
	/// Leading magic word is not `FOMB`.
	BadMagic {
		/// Magic word found at offset 0.
		found: u32,
	},
	/// Container format revision is not 1.
	BadVersion {
		/// Version word found at offset 4.
		found: u32,
	},
	/// Declared compressed length disagrees with the trailing payload.
	PayloadLengthMismatch {
		/// Length declared at offset 8.
		declared: u32,
		/// Bytes actually present after the header.
		actual: usize,
	},
	/// Declared decompressed length exceeds the inflation ceiling.
	DeclaredLenTooLarge {
		/// Length declared at offset 12.
		declared: u32,
	},
}

/// Errors produced while reading, validating, inflating, and decoding BMOF containers.
#[derive(Debug, Error)]
pub enum BmofError {
	/// Reading the raw container from a file or stdin failed.
	#[error("cannot read input {path}: {source}")]
	ReadInput {
		/// Offending path, or `(stdin)`.
		path: String,
		/// Underlying OS diagnostic.
		source: std::io::Error,
	},
	/// Writing the decompiled text to a file or stdout failed.
	#[error("cannot write output {path}: {source}")]
	WriteOutput {
		/// Offending path, or `(stdout)`.
		path: String,
		/// Underlying OS diagnostic.
		source: std::io::Error,
	},
	/// Raw input exceeded the fixed ingestion ceiling.
	#[error("input {path} larger than {limit} bytes")]
	InputTooLarge {
		/// Offending path, or `(stdin)`.
		path: String,
		/// Maximum accepted raw input size.
		limit: usize,
	},
	/// Container header failed validation.
	#[error("Invalid input")]
	InvalidContainer {
		/// The specific header check that failed.
		fault: ContainerFault,
	},
	/// Codec failed or produced a byte count different from the declared length.
	#[error("Decompress failed")]
	Decompress,
	/// Not enough bytes remained in the class stream for a requested read.
	#[error("unexpected end of class stream at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte outside the range its site defines.
	#[error("unknown {what} tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Site being decoded when the tag was read.
		what: &'static str,
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Flag byte holds a value outside its defined bits.
	#[error("invalid {what} byte 0x{value:02x} at offset {at}")]
	BadFlagByte {
		/// Flag being decoded.
		what: &'static str,
		/// Offending byte.
		value: u8,
		/// Byte offset of the flag.
		at: usize,
	},
	/// List count implies more bytes than the stream holds.
	#[error("{what} count {count} at offset {at} exceeds remaining {rem} bytes")]
	CountTooLarge {
		/// List being decoded.
		what: &'static str,
		/// Declared element count.
		count: u32,
		/// Byte offset of the count word.
		at: usize,
		/// Bytes still available.
		rem: usize,
	},
}
