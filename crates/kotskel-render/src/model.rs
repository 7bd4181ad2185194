//! Language-neutral declaration tree consumed by the filter and renderer.
//!
//! Front-ends lower their syntax trees into these types. Optional data coming out of
//! the parser (names, parameter names, visibility keywords) is normalised here, so the
//! rendering code never has to decide what an absent value means.

/// Name rendered in place of an anonymous declaration.
pub const ANONYMOUS: &str = "<anonymous>";

/// Name rendered in place of a parameter without a resolvable name.
pub const UNNAMED_PARAM: &str = "_";

/// Declared visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
	/// Visible everywhere. Declarations without a visibility keyword land here.
	#[default]
	Public,
	/// Visible inside the same module.
	Internal,
	/// Visible to subclasses.
	Protected,
	/// Visible inside the same file or class.
	Private,
}

impl Visibility {
	/// Normalise an optional visibility keyword.
	///
	/// `None` means the source carried no visibility keyword, which is public. Unknown
	/// keywords are treated the same way: only the keywords listed on [`Visibility`]
	/// restrict access.
	pub fn from_modifier(modifier: Option<&str>) -> Self {
		match modifier.map(str::trim) {
			Some("internal") => Self::Internal,
			Some("protected") => Self::Protected,
			Some("private") => Self::Private,
			_ => Self::Public,
		}
	}

	/// Whether the declaration is visible outside its defining file or module.
	pub fn is_public(self) -> bool {
		matches!(self, Self::Public)
	}
}

/// A single value parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
	/// Parameter name, if the parser could resolve one.
	pub name: Option<String>,
}

impl Parameter {
	/// Create a parameter, dropping empty names.
	pub fn new(name: Option<impl Into<String>>) -> Self {
		Self {
			name: normalize_name(name),
		}
	}

	/// Create a named parameter.
	pub fn named(name: impl Into<String>) -> Self {
		Self::new(Some(name))
	}

	/// Create a parameter with no resolvable name.
	pub fn unnamed() -> Self {
		Self { name: None }
	}

	/// Name used in rendered output.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(UNNAMED_PARAM)
	}
}

/// Shape of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
	/// Value parameters in source order.
	pub params: Vec<Parameter>,
}

/// Shape of a class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Class {
	/// Member declarations in source order.
	pub members: Vec<Declaration>,
}

/// Kind-specific payload of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
	/// A function, method, or constructor.
	Function(Function),
	/// A class, interface, or enum class.
	Class(Class),
	/// Any other declaration, kept as the verbatim source text.
	Other {
		/// Original source text of the declaration.
		text: String,
	},
}

/// A top-level or member declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	/// Declared name; `None` for anonymous declarations.
	pub name: Option<String>,
	/// Normalised visibility.
	pub visibility: Visibility,
	/// Kind-specific data.
	pub kind: DeclarationKind,
}

impl Declaration {
	/// Build a declaration from raw parser output.
	pub fn new(
		name: Option<impl Into<String>>,
		modifier: Option<&str>,
		kind: DeclarationKind,
	) -> Self {
		Self {
			name: normalize_name(name),
			visibility: Visibility::from_modifier(modifier),
			kind,
		}
	}

	/// Build a function declaration.
	pub fn function(
		name: Option<impl Into<String>>,
		modifier: Option<&str>,
		params: Vec<Parameter>,
	) -> Self {
		Self::new(name, modifier, DeclarationKind::Function(Function { params }))
	}

	/// Build a class declaration.
	pub fn class(
		name: Option<impl Into<String>>,
		modifier: Option<&str>,
		members: Vec<Declaration>,
	) -> Self {
		Self::new(name, modifier, DeclarationKind::Class(Class { members }))
	}

	/// Build a declaration that is rendered verbatim.
	pub fn other(
		name: Option<impl Into<String>>,
		modifier: Option<&str>,
		text: impl Into<String>,
	) -> Self {
		Self::new(name, modifier, DeclarationKind::Other { text: text.into() })
	}

	/// Name used in rendered output.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(ANONYMOUS)
	}

	/// Shorthand for `self.visibility.is_public()`.
	pub fn is_public(&self) -> bool {
		self.visibility.is_public()
	}

	/// Function payload, if this is a function.
	pub fn as_function(&self) -> Option<&Function> {
		match &self.kind {
			DeclarationKind::Function(function) => Some(function),
			_ => None,
		}
	}
}

/// All top-level declarations of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFile {
	/// Declarations in source order.
	pub declarations: Vec<Declaration>,
}

impl SourceFile {
	/// Wrap a list of declarations.
	pub fn new(declarations: Vec<Declaration>) -> Self {
		Self { declarations }
	}
}

fn normalize_name(name: Option<impl Into<String>>) -> Option<String> {
	name.map(Into::into).filter(|name| !name.trim().is_empty())
}
