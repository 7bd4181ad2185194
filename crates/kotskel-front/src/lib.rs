//! Kotlin front-end for kotskel.
//!
//! Discovers Kotlin sources on disk, parses them with tree-sitter, and lowers the
//! resulting syntax trees into the declaration model from `kotskel-render`.

/// Errors produced while reading or parsing sources.
pub mod error;
/// Syntax tree lowering into the declaration model.
pub mod lower;
/// The tree-sitter backed parsing environment.
pub mod parser;
/// Source file discovery.
pub mod sources;

pub use error::{FrontError, Result};
pub use parser::{KotlinFrontend, kotlin_language};
pub use sources::{DEFAULT_EXTENSION, collect_sources, has_extension};
