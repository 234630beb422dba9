use crate::bmof::codec::Codec;
use crate::bmof::container::Container;
use crate::bmof::decode::parse_class_table;
use crate::bmof::error::Result;
use crate::bmof::print::render_mof;
use crate::bmof::schema::ClassTable;

/// Validate `raw`, inflate its payload with `codec`, decode the class
/// stream, and hand the table to the caller.
pub fn decode_container(raw: &[u8], codec: &dyn Codec) -> Result<ClassTable> {
	let container = Container::parse(raw)?;
	let inflated = container.inflate(codec)?;
	parse_class_table(&inflated)
}

/// Full pipeline, container bytes in, MOF text out.
pub fn decompile(raw: &[u8], codec: &dyn Codec) -> Result<String> {
	let table = decode_container(raw, codec)?;
	Ok(render_mof(&table))
}
