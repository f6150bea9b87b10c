//! Error types for tileset validation, generation and output

use std::fmt;
use std::path::{Path, PathBuf};

/// Everything that can go wrong between building a tileset and writing output
#[derive(Debug)]
pub enum AlgorithmError {
    /// Tiles or seed index do not form a usable tileset
    InvalidTileset {
        /// What is wrong with the tileset
        reason: String,
    },

    /// A generator or CLI setting is out of range
    InvalidParameter {
        /// Setting name
        parameter: &'static str,
        /// Offending value, as text
        value: String,
        /// Accepted range or rule that was broken
        reason: String,
    },

    /// A category value has no color in the palette
    MissingColor {
        /// Category value found in a tile
        value: u8,
        /// Number of palette entries
        palette_len: usize,
    },

    /// Every permitted attempt ended stuck
    ///
    /// Only produced when a maximum attempt count is configured; the
    /// unbounded generator restarts forever instead.
    AttemptsExhausted {
        /// Number of attempts that were started
        attempts: usize,
        /// Round budget each attempt was given
        stuck_budget: usize,
    },

    /// PNG or GIF encoding failed
    Encode {
        /// Output file
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// Reading, writing or creating a path failed
    Io {
        /// Path or stream involved
        path: PathBuf,
        /// What was being done, e.g. "create directory"
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileset { reason } => write!(f, "Invalid tileset: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid {parameter} '{value}': {reason}"),
            Self::MissingColor { value, palette_len } => write!(
                f,
                "No color for category value {value} (palette has {palette_len} entries)"
            ),
            Self::AttemptsExhausted {
                attempts,
                stuck_budget,
            } => write!(
                f,
                "Grid did not converge after {attempts} attempts (budget {stuck_budget} rounds each)"
            ),
            Self::Encode { path, source } => {
                write!(f, "Could not encode '{}': {source}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(f, "Could not {operation} '{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AlgorithmError>;

// Console output goes through `?` on `write!`
impl From<std::io::Error> for AlgorithmError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<stdout>"),
            operation: "write to",
            source,
        }
    }
}

/// Build an [`AlgorithmError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build an [`AlgorithmError::InvalidTileset`]
pub fn invalid_tileset(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidTileset {
        reason: reason.to_string(),
    }
}

/// Adapter for `map_err` that tags an I/O error with its path and operation
pub fn io_failure(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> AlgorithmError {
    let path = path.to_path_buf();
    move |source| AlgorithmError::Io {
        path,
        operation,
        source,
    }
}

/// Adapter for `map_err` that tags an encoder error with its output path
pub fn encode_failure(path: &Path) -> impl FnOnce(image::ImageError) -> AlgorithmError {
    let path = path.to_path_buf();
    move |source| AlgorithmError::Encode { path, source }
}
