use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for the Padbury application.
///
/// Covers preference file loading and persistence as well as the output
/// surfaces the clock is drawn onto. Preference and font problems never
/// surface here: those resolve to defaults.
#[derive(Error, Debug)]
pub enum PadburyError {
    /// Preference field missing or invalid
    #[error("invalid preference '{key}': {reason}")]
    InvalidPreference {
        /// The preference key that is invalid
        key: String,
        /// Reason why the value was rejected
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A drawing surface could not be written
    #[error("surface '{surface}' failed: {details}")]
    SurfaceError {
        /// Surface kind (terminal, svg)
        surface: String,
        /// Error details
        details: String,
    },
}

/// A specialized `Result` type for Padbury operations.
pub type Result<T> = std::result::Result<T, PadburyError>;

impl PadburyError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        PadburyError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        PadburyError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a surface error for the given surface kind.
    pub fn surface(surface: &str, error: impl std::fmt::Display) -> Self {
        PadburyError::SurfaceError {
            surface: surface.to_string(),
            details: error.to_string(),
        }
    }
}
