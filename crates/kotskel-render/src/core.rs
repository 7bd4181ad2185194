use crate::filter::{is_visible, select_visible, visible_member_functions};
use crate::model::{Declaration, DeclarationKind, Function, SourceFile};
use crate::signature::{class_signature, function_signature};

/// Configurable renderer that turns declaration trees into signature outlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
	/// Whether non-public declarations and members should be rendered.
	pub render_private_items: bool,
}

impl Renderer {
	/// Create a renderer with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Render private items?
	pub fn with_private_items(mut self, render_private_items: bool) -> Self {
		self.render_private_items = render_private_items;
		self
	}

	/// Whether a declaration passes this renderer's visibility filter.
	pub fn includes(&self, decl: &Declaration) -> bool {
		self.render_private_items || is_visible(decl)
	}

	/// Select the declarations this renderer will emit, in source order.
	pub fn select<'a>(&self, declarations: &'a [Declaration]) -> Vec<&'a Declaration> {
		if self.render_private_items {
			declarations.iter().collect()
		} else {
			select_visible(declarations)
		}
	}

	/// Render a single declaration.
	///
	/// The declaration itself is not filtered; class members are.
	pub fn render(&self, decl: &Declaration) -> String {
		match &decl.kind {
			DeclarationKind::Function(function) => function_signature(decl, function),
			DeclarationKind::Class(class) => {
				let members: Vec<(&Declaration, &Function)> = if self.render_private_items {
					class
						.members
						.iter()
						.filter_map(|member| member.as_function().map(|f| (member, f)))
						.collect()
				} else {
					visible_member_functions(&class.members)
				};
				class_signature(decl, &members)
			}
			DeclarationKind::Other { text } => text.clone(),
		}
	}

	/// Render every selected declaration of a file, one per line or block.
	pub fn render_file(&self, file: &SourceFile) -> String {
		let mut output = String::new();
		for decl in self.select(&file.declarations) {
			output.push_str(&self.render(decl));
			output.push('\n');
		}
		output
	}
}
