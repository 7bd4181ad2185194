//! Core library for kotskel, providing the main API for outlining Kotlin sources.
//!
//! This crate provides the high-level `Kotskel` API which orchestrates source
//! discovery, parsing, visibility filtering, and signature rendering. It is designed
//! to be UI-agnostic and can be used by any frontend (CLI, editor plugin, etc.).

/// Error helpers for the core API.
pub mod error;

use std::fmt;
use std::path::{Path, PathBuf};
use std::vec;

pub use kotskel_front::DEFAULT_EXTENSION;
use kotskel_front::{KotlinFrontend, collect_sources};
pub use kotskel_render::Renderer;
use tracing::{debug, warn};

pub use crate::error::{KotskelError, Result};

/// Outline produced for one source file.
#[derive(Debug)]
pub struct FileOutline {
	/// Path of the source file, as discovered.
	pub path: PathBuf,
	/// Rendered signatures, or the reason this file could not be outlined.
	pub outcome: Result<String>,
}

impl FileOutline {
	/// Whether the file was outlined successfully.
	pub fn is_ok(&self) -> bool {
		self.outcome.is_ok()
	}

	/// Absolute form of the path, for error reports.
	pub fn absolute_path(&self) -> PathBuf {
		std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
	}
}

/// Lazily outlines a resolved set of sources, one file per call to `next`.
///
/// The parser is shared by every file and released when the iterator is dropped.
pub struct Outlines {
	front: KotlinFrontend,
	renderer: Renderer,
	files: vec::IntoIter<PathBuf>,
}

impl Iterator for Outlines {
	type Item = FileOutline;

	fn next(&mut self) -> Option<FileOutline> {
		let path = self.files.next()?;
		debug!(path = %path.display(), "outlining");
		let outcome = self
			.front
			.parse_file(&path)
			.map(|file| self.renderer.render_file(&file))
			.map_err(KotskelError::from);
		if let Err(err) = &outcome {
			warn!(path = %path.display(), "{err}");
		}
		Some(FileOutline { path, outcome })
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.files.size_hint()
	}
}

impl ExactSizeIterator for Outlines {}

impl fmt::Debug for Outlines {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Outlines")
			.field("renderer", &self.renderer)
			.field("remaining", &self.files.as_slice())
			.finish_non_exhaustive()
	}
}

/// Kotskel prints a condensed signature for every publicly visible top-level
/// declaration in a set of Kotlin sources.
///
/// Functions render as `fun name(a, b)`, classes as `class Name` followed by a block of
/// their visible member functions, and every other declaration as its original text.
#[derive(Debug, Clone)]
pub struct Kotskel {
	/// Whether non-public declarations are rendered too.
	private_items: bool,

	/// Whether sources with syntax errors are outlined from the recovered tree.
	lenient: bool,

	/// File extensions, without the leading dot, that identify Kotlin sources.
	extensions: Vec<String>,
}

impl Default for Kotskel {
	fn default() -> Self {
		Self::new()
	}
}

impl Kotskel {
	/// Creates a new Kotskel instance with default configuration.
	pub fn new() -> Self {
		Self {
			private_items: false,
			lenient: false,
			extensions: vec![DEFAULT_EXTENSION.to_string()],
		}
	}

	/// Enables or disables rendering of non-public declarations and members.
	pub fn with_private_items(mut self, private_items: bool) -> Self {
		self.private_items = private_items;
		self
	}

	/// Enables or disables lenient parsing, which outlines files despite syntax errors.
	pub fn with_lenient(mut self, lenient: bool) -> Self {
		self.lenient = lenient;
		self
	}

	/// Sets the extensions used to discover sources. Leading dots are ignored and an
	/// empty list keeps the current setting.
	pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let extensions: Vec<String> = extensions
			.into_iter()
			.map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
			.filter(|ext| !ext.is_empty())
			.collect();
		if !extensions.is_empty() {
			self.extensions = extensions;
		}
		self
	}

	/// Extensions used to discover sources.
	pub fn extensions(&self) -> &[String] {
		&self.extensions
	}

	/// The renderer configured for this instance.
	pub fn renderer(&self) -> Renderer {
		Renderer::default().with_private_items(self.private_items)
	}

	/// List the sources a target resolves to.
	pub fn sources(&self, target: &Path) -> Result<Vec<PathBuf>> {
		let files = collect_sources(target, &self.extensions)?;
		if files.is_empty() {
			return Err(KotskelError::NoSources(target.to_path_buf()));
		}
		Ok(files)
	}

	/// Outline every source below `target`.
	///
	/// Sources are resolved up front, then parsed and rendered one at a time as the
	/// returned iterator is advanced. Failures confined to one file are recorded in its
	/// [`FileOutline`] and the remaining files are still processed. Only a missing
	/// target, an empty source set, or a parser that cannot be initialised fail the
	/// whole call.
	pub fn outline(&self, target: &Path) -> Result<Outlines> {
		let files = self.sources(target)?;
		Ok(Outlines {
			front: self.frontend()?,
			renderer: self.renderer(),
			files: files.into_iter(),
		})
	}

	/// Outline a single Kotlin source held in memory.
	pub fn render_source(&self, source: &str) -> Result<String> {
		let file = self.frontend()?.parse(source)?;
		Ok(self.renderer().render_file(&file))
	}

	fn frontend(&self) -> Result<KotlinFrontend> {
		Ok(KotlinFrontend::new()?.with_lenient(self.lenient))
	}
}
