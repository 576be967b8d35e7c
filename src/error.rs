//! Error types and Result aliases for ansimark

use std::fmt;

use crate::styles::{StyleError, StyleKind};

/// Result type alias for ansimark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ansimark
#[derive(Debug)]
pub enum Error {
    // === Selection errors ===
    /// Selection offsets do not address the document text
    InvalidSelection {
        start: usize,
        end: usize,
        len: usize,
    },

    // === Style errors ===
    /// Style command does not match any registry entry
    UnknownStyle {
        kind: StyleKind,
        code: u8,
    },

    // === Serialization errors ===
    /// Document (de)serialization errors
    Serde(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelection { start, end, len } => {
                write!(
                    f,
                    "Invalid selection {}..{} for document of length {}",
                    start, end, len
                )
            }
            Error::UnknownStyle { kind, code } => {
                write!(f, "Unknown {} style code {}", kind, code)
            }
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<StyleError> for Error {
    fn from(err: StyleError) -> Self {
        match err {
            StyleError::UnknownStyle { kind, code } => Error::UnknownStyle { kind, code },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}
