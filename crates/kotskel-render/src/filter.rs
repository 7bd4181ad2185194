use crate::model::{Declaration, Function};

/// Whether a declaration is visible outside its defining file or module.
pub fn is_visible(decl: &Declaration) -> bool {
	decl.is_public()
}

/// Select the publicly visible declarations, keeping their source order.
pub fn select_visible(declarations: &[Declaration]) -> Vec<&Declaration> {
	declarations.iter().filter(|decl| is_visible(decl)).collect()
}

/// Select the visible member functions of a class body, keeping their source order.
///
/// Members that are not functions never take part, whatever their visibility.
pub fn visible_member_functions(members: &[Declaration]) -> Vec<(&Declaration, &Function)> {
	members
		.iter()
		.filter(|member| is_visible(member))
		.filter_map(|member| member.as_function().map(|function| (member, function)))
		.collect()
}
