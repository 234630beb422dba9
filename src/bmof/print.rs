use crate::bmof::schema::{
	Class, ClassTable, DEFAULT_NAMESPACE, Qualifier, QualifierValue, Variable, VariableType,
};

/// Document-wide pragma toggles, fixed by a pre-scan before any output.
///
/// Once a toggle is on it applies to every emitted class, including
/// classes whose own namespace or flags would not have tripped it.
/// Tombstones feed neither toggle.
#[derive(Clone, Copy, Default)]
struct Pragmas {
	namespace: bool,
	classflags: bool,
}

impl Pragmas {
	fn scan(table: &ClassTable) -> Self {
		let mut pragmas = Self::default();
		for class in &table.classes {
			if class.is_tombstone() {
				continue;
			}
			if let Some(ns) = class.namespace.as_deref()
				&& ns != DEFAULT_NAMESPACE
			{
				pragmas.namespace = true;
			}
			if class.flags != 0 {
				pragmas.classflags = true;
			}
		}
		pragmas
	}
}

/// Render a class table as MOF text.
///
/// Pure function of the table: no I/O, deterministic byte-for-byte
/// across calls. Tombstoned records produce nothing, not even the blank
/// separator line between emitted classes.
pub fn render_mof(table: &ClassTable) -> String {
	let pragmas = Pragmas::scan(table);
	let mut out = String::new();
	let mut first = true;
	for class in &table.classes {
		let Some(name) = class.name.as_deref() else { continue };
		if !first {
			out.push('\n');
		}
		first = false;
		render_class(&mut out, class, name, pragmas);
	}
	out
}

fn render_class(out: &mut String, class: &Class, name: &str, pragmas: Pragmas) {
	if pragmas.namespace {
		out.push_str("#pragma namespace(\"");
		escape_into(out, class.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE));
		out.push_str("\")\n");
	}
	if pragmas.classflags {
		out.push_str("#pragma classflags(");
		render_classflags(out, class.flags);
		out.push_str(")\n");
	}
	if !class.qualifiers.is_empty() {
		qualifier_bracket(out, None, &class.qualifiers);
		out.push('\n');
	}

	out.push_str("class ");
	escape_into(out, name);
	out.push(' ');
	if let Some(superclass) = class.superclass.as_deref() {
		out.push_str(": ");
		escape_into(out, superclass);
		out.push(' ');
	}
	out.push_str("{\n");

	for variable in &class.variables {
		out.push_str("  ");
		render_variable(out, variable, None);
		out.push_str(";\n");
	}
	if !class.variables.is_empty() && !class.methods.is_empty() {
		out.push('\n');
	}
	for method in &class.methods {
		out.push_str("  ");
		if !method.qualifiers.is_empty() {
			qualifier_bracket(out, None, &method.qualifiers);
			out.push(' ');
		}
		match &method.return_type {
			Some(ty) => render_type(out, ty),
			None => out.push_str("void"),
		}
		out.push(' ');
		escape_into(out, &method.name);
		out.push('(');
		for (k, parameter) in method.parameters.iter().enumerate() {
			if k > 0 {
				out.push_str(", ");
			}
			render_variable(out, &parameter.variable, parameter.direction.prefix());
		}
		out.push_str(");\n");
	}

	out.push_str("};\n");
}

/// Named flag combinations; anything else falls back to signed decimal,
/// the form existing decompiled output carries.
fn render_classflags(out: &mut String, flags: u32) {
	match flags {
		1 => out.push_str("\"updateonly\""),
		2 => out.push_str("\"createonly\""),
		32 => out.push_str("\"safeupdate\""),
		33 => out.push_str("\"updateonly\", \"safeupdate\""),
		64 => out.push_str("\"forceupdate\""),
		65 => out.push_str("\"updateonly\", \"forceupdate\""),
		other => out.push_str(&(other as i32).to_string()),
	}
}

/// One variable or parameter: optional bracket, type, name, array suffix.
fn render_variable(out: &mut String, variable: &Variable, prefix: Option<&'static str>) {
	if !variable.qualifiers.is_empty() || prefix.is_some() {
		qualifier_bracket(out, prefix, &variable.qualifiers);
		out.push(' ');
	}
	render_type(out, &variable.ty);
	out.push(' ');
	escape_into(out, &variable.name);
	if let VariableType::BasicArray { max, .. } | VariableType::ObjectArray { max, .. } =
		&variable.ty
	{
		out.push('[');
		if let Some(max) = max {
			out.push_str(&(*max as i32).to_string());
		}
		out.push(']');
	}
}

/// Type keyword, or for object types the stored class name verbatim.
fn render_type(out: &mut String, ty: &VariableType) {
	match ty {
		VariableType::Basic(basic) | VariableType::BasicArray { elem: basic, .. } => {
			out.push_str(basic.keyword().unwrap_or("unknown"));
		}
		VariableType::Object(class) | VariableType::ObjectArray { class, .. } => {
			if class.is_empty() {
				out.push_str("unknown");
			} else {
				out.push_str(class);
			}
		}
	}
}

/// `[prefix, name(value) : Flavors, ...]`; callers skip the bracket
/// entirely when there is no prefix and no qualifier.
fn qualifier_bracket(out: &mut String, prefix: Option<&str>, qualifiers: &[Qualifier]) {
	out.push('[');
	if let Some(prefix) = prefix {
		out.push_str(prefix);
		if !qualifiers.is_empty() {
			out.push_str(", ");
		}
	}
	for (i, qualifier) in qualifiers.iter().enumerate() {
		if i > 0 {
			out.push_str(", ");
		}
		escape_into(out, &qualifier.name);
		match &qualifier.value {
			QualifierValue::Boolean(true) => {}
			QualifierValue::Boolean(false) => out.push_str("(FALSE)"),
			QualifierValue::SInt32(v) => {
				out.push('(');
				out.push_str(&v.to_string());
				out.push(')');
			}
			QualifierValue::String(s) => {
				out.push_str("(\"");
				escape_into(out, s);
				out.push_str("\")");
			}
		}
		let flavor = qualifier.flavor;
		if flavor.any() {
			out.push_str(" :");
			if flavor.to_instance {
				out.push_str(" ToInstance");
			}
			if flavor.to_subclass {
				out.push_str(" ToSubclass");
			}
			if flavor.disable_override {
				out.push_str(" DisableOverride");
			}
			if flavor.amended {
				out.push_str(" Amended");
			}
		}
	}
	out.push(']');
}

/// Double quotes and backslashes get a leading backslash; everything
/// else passes through untouched.
fn escape_into(out: &mut String, s: &str) {
	for ch in s.chars() {
		if ch == '"' || ch == '\\' {
			out.push('\\');
		}
		out.push(ch);
	}
}
