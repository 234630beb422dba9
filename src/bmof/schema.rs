/// Namespace assumed for classes that carry none.
pub const DEFAULT_NAMESPACE: &str = "root\\default";

/// Typed payload of a qualifier, tag always matching the declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierValue {
	/// Boolean qualifier; `true` renders as the bare name.
	Boolean(bool),
	/// 32-bit signed integer qualifier.
	SInt32(i32),
	/// Text qualifier.
	String(Box<str>),
}

/// Propagation flags attached to a qualifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualifierFlavor {
	/// Qualifier propagates to instances.
	pub to_instance: bool,
	/// Qualifier propagates to subclasses.
	pub to_subclass: bool,
	/// Subclasses may not override the qualifier.
	pub disable_override: bool,
	/// Qualifier text is localized.
	pub amended: bool,
}

impl QualifierFlavor {
	/// Whether any propagation flag is set.
	pub fn any(self) -> bool {
		self.to_instance || self.to_subclass || self.disable_override || self.amended
	}
}

/// One named, typed metadata annotation on a class, variable, or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
	/// Qualifier name.
	pub name: Box<str>,
	/// Typed payload.
	pub value: QualifierValue,
	/// Propagation flags.
	pub flavor: QualifierFlavor,
}

/// Primitive CIM property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicType {
	/// Text.
	String,
	/// 64-bit float.
	Real64,
	/// 32-bit float.
	Real32,
	/// 32-bit signed integer.
	SInt32,
	/// 32-bit unsigned integer.
	UInt32,
	/// 16-bit signed integer.
	SInt16,
	/// 16-bit unsigned integer.
	UInt16,
	/// 64-bit signed integer.
	SInt64,
	/// 64-bit unsigned integer.
	UInt64,
	/// 8-bit signed integer.
	SInt8,
	/// 8-bit unsigned integer.
	UInt8,
	/// CIM datetime text.
	DateTime,
	/// UTF-16 code unit.
	Char16,
	/// Boolean.
	Boolean,
	/// Wire code with no MOF keyword; renders as `unknown`.
	Unknown(u8),
}

impl BasicType {
	/// Map a wire code to its type; codes outside the table are kept as [`BasicType::Unknown`].
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => Self::String,
			1 => Self::Real64,
			2 => Self::Real32,
			3 => Self::SInt32,
			4 => Self::UInt32,
			5 => Self::SInt16,
			6 => Self::UInt16,
			7 => Self::SInt64,
			8 => Self::UInt64,
			9 => Self::SInt8,
			10 => Self::UInt8,
			11 => Self::DateTime,
			12 => Self::Char16,
			13 => Self::Boolean,
			other => Self::Unknown(other),
		}
	}

	/// MOF keyword for this type, or `None` when no keyword exists.
	pub fn keyword(self) -> Option<&'static str> {
		match self {
			Self::String => Some("string"),
			Self::Real64 => Some("real64"),
			Self::Real32 => Some("real32"),
			Self::SInt32 => Some("sint32"),
			Self::UInt32 => Some("uint32"),
			Self::SInt16 => Some("sint16"),
			Self::UInt16 => Some("uint16"),
			Self::SInt64 => Some("sint64"),
			Self::UInt64 => Some("uint64"),
			Self::SInt8 => Some("sint8"),
			Self::UInt8 => Some("uint8"),
			Self::DateTime => Some("datetime"),
			Self::Char16 => Some("char16"),
			Self::Boolean => Some("boolean"),
			Self::Unknown(_) => None,
		}
	}
}

/// Declared type of a property, parameter, or method return.
///
/// The array bound exists only on the array forms; `max: None` is an
/// unbounded `[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableType {
	/// Scalar primitive.
	Basic(BasicType),
	/// Array of primitives.
	BasicArray {
		/// Element type.
		elem: BasicType,
		/// Upper bound, when the array is bounded.
		max: Option<u32>,
	},
	/// Scalar reference to another class.
	Object(Box<str>),
	/// Array of references to another class.
	ObjectArray {
		/// Referenced class name.
		class: Box<str>,
		/// Upper bound, when the array is bounded.
		max: Option<u32>,
	},
}

/// One property of a class, or the variable half of a method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
	/// Property name.
	pub name: Box<str>,
	/// Declared type.
	pub ty: VariableType,
	/// Qualifiers in declaration order.
	pub qualifiers: Vec<Qualifier>,
}

/// Data-flow direction of a method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// No declared direction.
	Unspecified,
	/// Input parameter.
	In,
	/// Output parameter.
	Out,
	/// Input and output parameter.
	InOut,
}

impl Direction {
	/// Map a wire tag to a direction; tags outside the table are structural errors.
	pub fn from_tag(tag: u8) -> Option<Self> {
		match tag {
			0 => Some(Self::Unspecified),
			1 => Some(Self::In),
			2 => Some(Self::Out),
			3 => Some(Self::InOut),
			_ => None,
		}
	}

	/// Leading token inside the parameter's qualifier bracket, if any.
	pub fn prefix(self) -> Option<&'static str> {
		match self {
			Self::Unspecified => None,
			Self::In => Some("in"),
			Self::Out => Some("out"),
			Self::InOut => Some("in, out"),
		}
	}
}

/// One method parameter: a variable plus its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	/// Underlying variable descriptor.
	pub variable: Variable,
	/// Declared direction.
	pub direction: Direction,
}

/// One method of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
	/// Method name.
	pub name: Box<str>,
	/// Qualifiers in declaration order.
	pub qualifiers: Vec<Qualifier>,
	/// Return type; `None` renders as `void`.
	pub return_type: Option<VariableType>,
	/// Parameters in declaration order.
	pub parameters: Vec<Parameter>,
}

/// One decoded class record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
	/// Class name; `None` marks a tombstone that is never emitted.
	pub name: Option<Box<str>>,
	/// Defining namespace; `None` falls back to [`DEFAULT_NAMESPACE`].
	pub namespace: Option<Box<str>>,
	/// Parent class name, when the class derives from one.
	pub superclass: Option<Box<str>>,
	/// Repository update/create flag bits, preserved verbatim.
	pub flags: u32,
	/// Qualifiers in declaration order.
	pub qualifiers: Vec<Qualifier>,
	/// Properties in declaration order.
	pub variables: Vec<Variable>,
	/// Methods in declaration order.
	pub methods: Vec<Method>,
}

impl Class {
	/// Whether this record is a deleted/reserved slot.
	pub fn is_tombstone(&self) -> bool {
		self.name.is_none()
	}
}

/// Ordered class records decoded from one container.
///
/// Owned by the caller driving decode → print; dropping it releases the
/// whole model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
	/// Records in stream order, tombstones included.
	pub classes: Vec<Class>,
}

impl ClassTable {
	/// Number of records, tombstones included.
	pub fn len(&self) -> usize {
		self.classes.len()
	}

	/// Whether the table holds no records at all.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}
}
