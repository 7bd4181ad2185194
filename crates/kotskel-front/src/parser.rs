//! Tree-sitter parser integration for Kotlin.

use std::fs;
use std::path::Path;

use kotskel_render::SourceFile;
use tracing::debug;
use tree_sitter::{Language, Parser, Tree};

use crate::error::{FrontError, Result};
use crate::lower::{first_error, lower_file};

/// Get the tree-sitter language for Kotlin.
pub fn kotlin_language() -> Language {
	tree_sitter_kotlin_ng::LANGUAGE.into()
}

/// Parsing environment for a batch of Kotlin files.
///
/// The underlying tree-sitter parser is created once and reused for every file passed
/// to [`KotlinFrontend::parse`]; it is released when the front-end is dropped.
pub struct KotlinFrontend {
	parser: Parser,
	lenient: bool,
}

impl KotlinFrontend {
	/// Create a front-end with the Kotlin grammar loaded.
	pub fn new() -> Result<Self> {
		let mut parser = Parser::new();
		parser.set_language(&kotlin_language())?;
		Ok(Self {
			parser,
			lenient: false,
		})
	}

	/// Accept sources with syntax errors, lowering whatever the parser recovered.
	pub fn with_lenient(mut self, lenient: bool) -> Self {
		self.lenient = lenient;
		self
	}

	/// Parse Kotlin source text into its top-level declarations.
	pub fn parse(&mut self, source: &str) -> Result<SourceFile> {
		let tree = self.parse_tree(source)?;
		let root = tree.root_node();

		if !self.lenient
			&& let Some(error) = first_error(&root)
		{
			let position = error.start_position();
			return Err(FrontError::Parse {
				line: position.row + 1,
				column: position.column + 1,
			});
		}

		let declarations = lower_file(&root, source);
		debug!(count = declarations.len(), "lowered top-level declarations");
		Ok(SourceFile::new(declarations))
	}

	/// Read and parse a Kotlin file.
	pub fn parse_file(&mut self, path: &Path) -> Result<SourceFile> {
		let source = fs::read_to_string(path).map_err(|source| FrontError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		self.parse(&source)
	}

	fn parse_tree(&mut self, source: &str) -> Result<Tree> {
		self.parser.parse(source, None).ok_or(FrontError::NoTree)
	}
}
