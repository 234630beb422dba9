use crate::bmof::bytes::Cursor;
use crate::bmof::error::{BmofError, Result};
use crate::bmof::schema::{
	BasicType, Class, ClassTable, Direction, Method, Parameter, Qualifier, QualifierFlavor,
	QualifierValue, Variable, VariableType,
};

/// Ceiling on the element count any counted list pre-allocates.
const MAX_EAGER_RESERVE: usize = 4096;

/// Decode a decompressed class stream into a table.
///
/// The scan is a single forward pass; class records are read until the
/// buffer is exhausted, so an empty buffer decodes to an empty table.
/// Any structural fault aborts the whole decode; a partially built
/// table is never returned. The two tolerated oddities are unrecognized
/// basic-type codes (kept as [`BasicType::Unknown`]) and tombstone
/// records, which are retained in position with no name.
pub fn parse_class_table(bytes: &[u8]) -> Result<ClassTable> {
	let mut cur = Cursor::new(bytes);
	let mut classes = Vec::new();
	while cur.remaining() > 0 {
		classes.push(read_class(&mut cur)?);
	}
	Ok(ClassTable { classes })
}

fn read_class(cur: &mut Cursor<'_>) -> Result<Class> {
	let name = read_opt_string(cur, "class name flag")?;
	let namespace = read_opt_string(cur, "namespace flag")?;
	let superclass = read_opt_string(cur, "superclass flag")?;
	let flags = cur.read_u32_le()?;
	let qualifiers = read_qualifier_list(cur)?;

	let var_count = read_count(cur, "variable")?;
	let mut variables = Vec::with_capacity(reserve_hint(var_count));
	for _ in 0..var_count {
		variables.push(read_variable(cur)?);
	}

	let method_count = read_count(cur, "method")?;
	let mut methods = Vec::with_capacity(reserve_hint(method_count));
	for _ in 0..method_count {
		methods.push(read_method(cur)?);
	}

	Ok(Class { name, namespace, superclass, flags, qualifiers, variables, methods })
}

fn read_variable(cur: &mut Cursor<'_>) -> Result<Variable> {
	let name = read_string(cur)?;
	let ty = read_type_desc(cur)?;
	let qualifiers = read_qualifier_list(cur)?;
	Ok(Variable { name, ty, qualifiers })
}

fn read_method(cur: &mut Cursor<'_>) -> Result<Method> {
	let name = read_string(cur)?;
	let qualifiers = read_qualifier_list(cur)?;
	let return_type = if read_flag(cur, "return type flag")? { Some(read_type_desc(cur)?) } else { None };

	let param_count = read_count(cur, "parameter")?;
	let mut parameters = Vec::with_capacity(reserve_hint(param_count));
	for _ in 0..param_count {
		parameters.push(read_parameter(cur)?);
	}

	Ok(Method { name, qualifiers, return_type, parameters })
}

fn read_parameter(cur: &mut Cursor<'_>) -> Result<Parameter> {
	let variable = read_variable(cur)?;
	let at = cur.pos();
	let tag = cur.read_u8()?;
	let direction = Direction::from_tag(tag)
		.ok_or(BmofError::UnknownTag { what: "parameter direction", tag, at })?;
	Ok(Parameter { variable, direction })
}

fn read_type_desc(cur: &mut Cursor<'_>) -> Result<VariableType> {
	let at = cur.pos();
	let tag = cur.read_u8()?;
	match tag {
		0 => Ok(VariableType::Basic(BasicType::from_code(cur.read_u8()?))),
		1 => {
			let elem = BasicType::from_code(cur.read_u8()?);
			let max = read_array_bound(cur)?;
			Ok(VariableType::BasicArray { elem, max })
		}
		2 => Ok(VariableType::Object(read_string(cur)?)),
		3 => {
			let class = read_string(cur)?;
			let max = read_array_bound(cur)?;
			Ok(VariableType::ObjectArray { class, max })
		}
		_ => Err(BmofError::UnknownTag { what: "type descriptor", tag, at }),
	}
}

fn read_array_bound(cur: &mut Cursor<'_>) -> Result<Option<u32>> {
	if read_flag(cur, "array bound flag")? { Ok(Some(cur.read_u32_le()?)) } else { Ok(None) }
}

fn read_qualifier_list(cur: &mut Cursor<'_>) -> Result<Vec<Qualifier>> {
	let count = read_count(cur, "qualifier")?;
	let mut qualifiers = Vec::with_capacity(reserve_hint(count));
	for _ in 0..count {
		qualifiers.push(read_qualifier(cur)?);
	}
	Ok(qualifiers)
}

fn read_qualifier(cur: &mut Cursor<'_>) -> Result<Qualifier> {
	let name = read_string(cur)?;

	let at = cur.pos();
	let tag = cur.read_u8()?;
	let value = match tag {
		0 => QualifierValue::Boolean(read_flag(cur, "boolean qualifier")?),
		1 => QualifierValue::SInt32(cur.read_i32_le()?),
		2 => QualifierValue::String(read_string(cur)?),
		_ => return Err(BmofError::UnknownTag { what: "qualifier kind", tag, at }),
	};

	let at = cur.pos();
	let bits = cur.read_u8()?;
	if bits & !0x0F != 0 {
		return Err(BmofError::BadFlagByte { what: "qualifier flavor", value: bits, at });
	}
	let flavor = QualifierFlavor {
		to_instance: bits & 0x01 != 0,
		to_subclass: bits & 0x02 != 0,
		disable_override: bits & 0x04 != 0,
		amended: bits & 0x08 != 0,
	};

	Ok(Qualifier { name, value, flavor })
}

fn read_opt_string(cur: &mut Cursor<'_>, what: &'static str) -> Result<Option<Box<str>>> {
	if read_flag(cur, what)? { Ok(Some(read_string(cur)?)) } else { Ok(None) }
}

/// Length-prefixed bytes, converted lossily so undecodable names still print.
fn read_string(cur: &mut Cursor<'_>) -> Result<Box<str>> {
	let len = cur.read_u32_le()?;
	let raw = cur.read_exact(len as usize)?;
	Ok(String::from_utf8_lossy(raw).into())
}

fn read_flag(cur: &mut Cursor<'_>, what: &'static str) -> Result<bool> {
	let at = cur.pos();
	match cur.read_u8()? {
		0 => Ok(false),
		1 => Ok(true),
		value => Err(BmofError::BadFlagByte { what, value, at }),
	}
}

/// List count, checked against the bytes still unread before any
/// reserve. Every encoded element occupies at least one byte, so a
/// count larger than the bytes left is corrupt no matter what follows.
fn read_count(cur: &mut Cursor<'_>, what: &'static str) -> Result<u32> {
	let at = cur.pos();
	let count = cur.read_u32_le()?;
	let rem = cur.remaining();
	if count as usize > rem {
		return Err(BmofError::CountTooLarge { what, count, at, rem });
	}
	Ok(count)
}

/// Initial capacity for a counted list; lists past the ceiling grow as
/// their elements arrive.
fn reserve_hint(count: u32) -> usize {
	(count as usize).min(MAX_EAGER_RESERVE)
}
