//! Signature rendering for individual declarations.
//!
//! These helpers produce the compact, body-less form of a declaration. Deciding which
//! declarations and members to pass in is left to the caller; see [`crate::Renderer`].

use crate::model::{Declaration, Function};

/// Indentation applied to member lines inside a class block.
pub const MEMBER_INDENT: &str = "   ";

/// Render a parameter list without the surrounding parentheses.
pub fn render_params(function: &Function) -> String {
	function
		.params
		.iter()
		.map(|param| param.display_name())
		.collect::<Vec<_>>()
		.join(", ")
}

/// Render a function signature: `fun name(a, b)`.
pub fn function_signature(decl: &Declaration, function: &Function) -> String {
	format!("fun {}({})", decl.display_name(), render_params(function))
}

/// Render a class signature, with a block listing the given member functions.
///
/// With no members the bare `class Name` header is returned.
pub fn class_signature(decl: &Declaration, members: &[(&Declaration, &Function)]) -> String {
	let mut signature = format!("class {}", decl.display_name());
	if members.is_empty() {
		return signature;
	}

	signature.push_str(" {");
	for (member, function) in members {
		signature.push('\n');
		signature.push_str(MEMBER_INDENT);
		signature.push_str(&function_signature(member, function));
	}
	signature.push_str("\n}");
	signature
}
