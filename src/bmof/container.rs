use crate::bmof::codec::Codec;
use crate::bmof::error::{BmofError, ContainerFault, Result};

/// Magic word at offset 0, the bytes `FOMB` read little-endian.
pub const MAGIC: u32 = 0x424D_4F46;
/// Only container revision ever emitted by the WMI toolchain.
pub const FORMAT_VERSION: u32 = 1;
/// Fixed header size: four little-endian `u32` words.
pub const HEADER_LEN: usize = 16;
/// Ceiling on the declared decompressed length, 32 MiB.
pub const MAX_DECOMPRESSED_LEN: u32 = 0x200_0000;

/// A container whose header passed validation; the payload is still compressed.
#[derive(Debug, Clone)]
pub struct Container<'a> {
	/// Payload size the header promises after inflation.
	pub decompressed_len: u32,
	/// Compressed payload, everything past the header.
	pub compressed: &'a [u8],
}

fn header_word(input: &[u8], at: usize) -> u32 {
	let mut word = [0u8; 4];
	word.copy_from_slice(&input[at..at + 4]);
	u32::from_le_bytes(word)
}

impl<'a> Container<'a> {
	/// Validate the 16-byte header of `input` and borrow the payload.
	///
	/// Checks run in a fixed order and the first failure wins: overall
	/// length, magic, version, payload length, inflation ceiling. A buffer
	/// of exactly [`HEADER_LEN`] bytes is rejected as truncated even
	/// though its declared payload length of zero would otherwise match.
	pub fn parse(input: &'a [u8]) -> Result<Self> {
		if input.len() <= HEADER_LEN {
			return Err(fault(ContainerFault::Truncated { len: input.len() }));
		}
		let magic = header_word(input, 0);
		if magic != MAGIC {
			return Err(fault(ContainerFault::BadMagic { found: magic }));
		}
		let version = header_word(input, 4);
		if version != FORMAT_VERSION {
			return Err(fault(ContainerFault::BadVersion { found: version }));
		}
		let declared = header_word(input, 8);
		let actual = input.len() - HEADER_LEN;
		if declared as usize != actual {
			return Err(fault(ContainerFault::PayloadLengthMismatch { declared, actual }));
		}
		let decompressed_len = header_word(input, 12);
		if decompressed_len > MAX_DECOMPRESSED_LEN {
			return Err(fault(ContainerFault::DeclaredLenTooLarge { declared: decompressed_len }));
		}
		Ok(Self { decompressed_len, compressed: &input[HEADER_LEN..] })
	}

	/// Inflate the payload with `codec`, holding it to the declared length.
	///
	/// A codec that reports success but hands back a different byte count
	/// is treated as a failed decompression.
	pub fn inflate(&self, codec: &dyn Codec) -> Result<Vec<u8>> {
		let out = codec.decompress(self.compressed, self.decompressed_len as usize)?;
		if out.len() != self.decompressed_len as usize {
			return Err(BmofError::Decompress);
		}
		Ok(out)
	}
}

fn fault(fault: ContainerFault) -> BmofError {
	BmofError::InvalidContainer { fault }
}
