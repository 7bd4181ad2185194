use std::path::PathBuf;

use thiserror::Error;
use tree_sitter::LanguageError;

/// Errors produced while discovering, reading, or parsing Kotlin sources.
#[derive(Debug, Error)]
pub enum FrontError {
	/// The Kotlin grammar could not be loaded into the parser.
	#[error("failed to load the Kotlin grammar: {0}")]
	Language(#[from] LanguageError),
	/// The parser gave up without producing a tree.
	#[error("parser produced no syntax tree")]
	NoTree,
	/// The source contains a syntax error.
	#[error("syntax error at line {line}, column {column}")]
	Parse {
		/// 1-based line of the first erroneous node.
		line: usize,
		/// 1-based column of the first erroneous node.
		column: usize,
	},
	/// A source file could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Read {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying I/O failure.
		source: std::io::Error,
	},
	/// Walking a source directory failed.
	#[error("failed to walk {}: {source}", path.display())]
	Walk {
		/// Directory being walked.
		path: PathBuf,
		/// Underlying traversal failure.
		source: walkdir::Error,
	},
}

impl FrontError {
	/// Whether this error only affects a single file.
	pub fn is_per_file(&self) -> bool {
		matches!(
			self,
			Self::NoTree | Self::Parse { .. } | Self::Read { .. }
		)
	}
}

/// Result type returned by front-end helpers.
pub type Result<T> = std::result::Result<T, FrontError>;
