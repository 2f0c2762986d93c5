//! Error types for lookups and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a dynamic lookup.
///
/// The dropdown never surfaces these to its host: a failed lookup settles as
/// an empty result list.
#[derive(Debug, Error)]
pub enum LookupError {
	/// The provider answered with an error.
	#[error("lookup failed: {0}")]
	Failed(String),

	/// The provider could not be reached.
	#[error("lookup provider unavailable")]
	Unavailable,

	/// Any other provider error.
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur when loading dropdown configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An option value is out of range.
	#[error("invalid value for '{key}': {reason}")]
	InvalidOption {
		/// The offending option key.
		key: &'static str,
		/// Why the value was rejected.
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
