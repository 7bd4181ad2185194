//! Lowering of the tree-sitter Kotlin syntax tree into the declaration model.

use kotskel_render::{Declaration, Parameter};
use tree_sitter::Node;

/// Node kinds that carry an identifier naming their parent.
const NAME_KINDS: &[&str] = &["identifier", "simple_identifier", "type_identifier"];

/// Node kinds that wrap class members without being declarations themselves.
const MEMBER_WRAPPERS: &[&str] = &["class_member_declarations", "class_member_declaration"];

/// Node kinds for class bodies.
const BODY_KINDS: &[&str] = &["class_body", "enum_class_body"];

/// Get the source text covered by a node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
	&source[node.start_byte()..node.end_byte()]
}

/// Lower the top-level declarations of a `source_file` node.
pub fn lower_file(root: &Node, source: &str) -> Vec<Declaration> {
	let mut cursor = root.walk();
	root.named_children(&mut cursor)
		.filter_map(|child| lower_declaration(&child, source, None))
		.collect()
}

/// Lower a single node, returning `None` when it is not a declaration.
///
/// `owner` is the name of the enclosing class, used to name secondary constructors.
fn lower_declaration(node: &Node, source: &str, owner: Option<&str>) -> Option<Declaration> {
	let modifier = visibility_keyword(node, source);
	let decl = match node.kind() {
		"function_declaration" => {
			Declaration::function(declared_name(node, source), modifier, parameters(node, source))
		}
		"secondary_constructor" => {
			Declaration::function(owner.map(str::to_string), modifier, parameters(node, source))
		}
		"class_declaration" => {
			let name = declared_name(node, source);
			let members = class_members(node, source, name.as_deref());
			Declaration::class(name, modifier, members)
		}
		"object_declaration" | "companion_object" | "property_declaration" | "type_alias"
		| "enum_entry" | "anonymous_initializer" => {
			Declaration::other(declared_name(node, source), modifier, node_text(node, source))
		}
		_ => return None,
	};
	Some(decl)
}

/// Collect the member declarations of a class body, in source order.
fn class_members(class: &Node, source: &str, owner: Option<&str>) -> Vec<Declaration> {
	let mut members = Vec::new();
	let mut cursor = class.walk();
	for body in class
		.named_children(&mut cursor)
		.filter(|child| BODY_KINDS.contains(&child.kind()))
	{
		collect_members(&body, source, owner, &mut members);
	}
	members
}

fn collect_members(
	node: &Node,
	source: &str,
	owner: Option<&str>,
	members: &mut Vec<Declaration>,
) {
	let mut cursor = node.walk();
	for child in node.named_children(&mut cursor) {
		if MEMBER_WRAPPERS.contains(&child.kind()) {
			collect_members(&child, source, owner, members);
		} else if let Some(decl) = lower_declaration(&child, source, owner) {
			members.push(decl);
		}
	}
}

/// Resolve the name a declaration introduces.
fn declared_name(node: &Node, source: &str) -> Option<String> {
	if let Some(name) = node.child_by_field_name("name") {
		return Some(node_text(&name, source).to_string());
	}
	if let Some(name) = first_child_of(node, NAME_KINDS) {
		return Some(node_text(&name, source).to_string());
	}
	// Properties name themselves through their variable declaration.
	first_child_of(node, &["variable_declaration"])
		.and_then(|var| first_child_of(&var, NAME_KINDS))
		.map(|name| node_text(&name, source).to_string())
}

/// Collect the value parameters of a function-like node.
fn parameters(node: &Node, source: &str) -> Vec<Parameter> {
	let Some(list) = first_child_of(node, &["function_value_parameters"]) else {
		return Vec::new();
	};
	let mut cursor = list.walk();
	list.named_children(&mut cursor)
		.filter(|child| child.kind() == "parameter")
		.map(|param| Parameter::new(declared_name(&param, source)))
		.collect()
}

/// Find the visibility keyword in a declaration's modifier list, if any.
fn visibility_keyword<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
	let modifiers = first_child_of(node, &["modifiers"])?;
	find_descendant(&modifiers, "visibility_modifier").map(|vis| node_text(&vis, source))
}

fn first_child_of<'t>(node: &Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
	let mut cursor = node.walk();
	let found = node
		.named_children(&mut cursor)
		.find(|child| kinds.contains(&child.kind()));
	found
}

fn find_descendant<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
	if node.kind() == kind {
		return Some(*node);
	}
	let mut cursor = node.walk();
	let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
	children
		.iter()
		.find_map(|child| find_descendant(child, kind))
}

/// Whether a missing node is an implied member separator rather than lost syntax.
///
/// The grammar inserts a zero-width separator before a closing brace when class
/// members share a line, which is valid Kotlin.
fn is_implied_separator(node: &Node) -> bool {
	node.is_missing()
		&& node.start_byte() == node.end_byte()
		&& (node.kind().starts_with('_') || node.kind() == ";" || node.kind().contains("semi"))
}

/// Locate the first error node, or missing node other than an implied separator.
pub fn first_error<'t>(node: &Node<'t>) -> Option<Node<'t>> {
	if node.is_error() || (node.is_missing() && !is_implied_separator(node)) {
		return Some(*node);
	}
	if !node.has_error() {
		return None;
	}
	let mut cursor = node.walk();
	let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
	children.iter().find_map(|child| first_error(child))
}
