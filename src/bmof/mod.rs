mod bytes;
mod codec;
mod container;
mod decode;
mod decompile;
mod error;
mod print;
mod schema;

/// Decompression strategy trait and the shipped zstd implementation.
pub use codec::{Codec, ZstdCodec};
/// Validated container representation.
pub use container::Container;
/// Class-stream decoding entry point.
pub use decode::parse_class_table;
/// Pipeline compositions from raw container bytes.
pub use decompile::{decode_container, decompile};
/// Error and result aliases.
pub use error::{BmofError, ContainerFault, Result};
/// MOF text rendering entry point.
pub use print::render_mof;
/// Schema object model.
pub use schema::{
	BasicType, Class, ClassTable, DEFAULT_NAMESPACE, Direction, Method, Parameter, Qualifier,
	QualifierFlavor, QualifierValue, Variable, VariableType,
};
