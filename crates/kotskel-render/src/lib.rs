//! Rendering logic that turns declaration trees into compact signature outlines.
//!
//! This crate is pure: it never touches the filesystem or a parser. Front-ends lower
//! their syntax trees into [`model`] types, the [`filter`] selects what is publicly
//! visible, and [`signature`] formats what remains.

/// Main renderer configuration and public API.
pub mod core;
/// Visibility filtering for top-level declarations and class members.
pub mod filter;
/// Declaration tree shared by front-ends and the renderer.
pub mod model;
/// Signature rendering utilities for single declarations.
pub mod signature;

// Re-export public API
pub use crate::core::Renderer;

pub use filter::{is_visible, select_visible, visible_member_functions};
pub use model::{
	ANONYMOUS, Class, Declaration, DeclarationKind, Function, Parameter, SourceFile,
	UNNAMED_PARAM, Visibility,
};

/// Render a declaration with the default renderer.
pub fn render(decl: &Declaration) -> String {
	Renderer::default().render(decl)
}
