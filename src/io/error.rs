//! Error types for cover search and the tiling front end

use std::fmt;
use std::path::PathBuf;

/// Main error type for all search and tiling operations
#[derive(Debug)]
pub enum CoverError {
    /// A choice in the family is not a subset of the universe
    ///
    /// Only reported when validation is requested, before any search work.
    InvalidInput {
        /// Position of the first offending choice in the family
        choice: usize,
    },

    /// Pivot selection was asked to work on an empty universe
    ///
    /// The search checks for the empty universe first, so this signals misuse
    /// of the helper rather than a search outcome.
    EmptyUniverse,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Piece name has no entry in the colour palette
    UnknownPiece {
        /// The unrecognised piece name
        name: char,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tilings could not be encoded to or decoded from JSON
    Serialization {
        /// File being written or read
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered tiling to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { choice } => {
                write!(
                    f,
                    "Choice {choice} is not a subset of the universe; every choice must be"
                )
            }
            Self::EmptyUniverse => {
                write!(f, "Cannot select a pivot from an empty universe")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownPiece { name } => {
                write!(f, "No colour is defined for piece '{name}'")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search and tiling results
pub type Result<T> = std::result::Result<T, CoverError>;

impl From<std::io::Error> for CoverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverError {
    CoverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
