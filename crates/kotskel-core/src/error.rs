use std::path::PathBuf;

use thiserror::Error;

/// Aggregate errors produced by the kotskel-core API.
#[derive(Debug, Error)]
pub enum KotskelError {
	/// Errors returned by the Kotlin front-end.
	#[error(transparent)]
	Front(#[from] kotskel_front::FrontError),
	/// The target did not name any Kotlin source.
	#[error("No Kotlin files found at: {}", .0.display())]
	NoSources(PathBuf),
}

impl KotskelError {
	/// Whether this error only affects a single file and the run may continue.
	pub fn is_per_file(&self) -> bool {
		match self {
			Self::Front(err) => err.is_per_file(),
			Self::NoSources(_) => false,
		}
	}
}

/// Result type returned by the kotskel-core library.
pub type Result<T> = std::result::Result<T, KotskelError>;
