use crate::bmof::error::{BmofError, Result};

/// Inflates a compressed BMOF payload.
///
/// The container header records the exact size the payload must inflate
/// to, so implementations receive `expected_len` as both an allocation
/// hint and a hard ceiling. Callers verify the returned length; a codec
/// may also reject oversize output itself.
pub trait Codec {
	/// Decompress `src` into at most `expected_len` bytes.
	fn decompress(&self, src: &[u8], expected_len: usize) -> Result<Vec<u8>>;
}

/// Payload codec backed by zstd single-shot decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZstdCodec;

impl Codec for ZstdCodec {
	fn decompress(&self, src: &[u8], expected_len: usize) -> Result<Vec<u8>> {
		zstd::bulk::decompress(src, expected_len).map_err(|_| BmofError::Decompress)
	}
}
