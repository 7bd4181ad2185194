use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{FrontError, Result};

/// Extension used when no other is configured.
pub const DEFAULT_EXTENSION: &str = "kt";

/// Check whether a path carries one of the accepted extensions.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Collect the source files named by `target`.
///
/// A matching file yields itself, a directory yields every matching file below it
/// sorted by path, and anything else yields nothing. Unreadable entries below the
/// target are skipped with a warning.
pub fn collect_sources(target: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
	if target.is_file() {
		return Ok(if has_extension(target, extensions) {
			vec![target.to_path_buf()]
		} else {
			Vec::new()
		});
	}
	if !target.is_dir() {
		return Ok(Vec::new());
	}

	let mut files = Vec::new();
	for entry in WalkDir::new(target).sort_by_file_name() {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) if err.depth() == 0 => {
				return Err(FrontError::Walk {
					path: target.to_path_buf(),
					source: err,
				});
			}
			Err(err) => {
				warn!("skipping unreadable entry: {err}");
				continue;
			}
		};
		if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
			files.push(entry.into_path());
		}
	}
	Ok(files)
}
