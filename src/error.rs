//! Error types with fix suggestions

use std::io;

use thiserror::Error;

use crate::codec::CodecError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Store errors, grouped by where they came from.
///
/// Filesystem errors keep their original `io::Error` so callers can match on
/// `ErrorKind` exactly as the OS reported it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] CodecError),

    #[error("Decode error: {0}")]
    Decode(#[source] CodecError),
}

impl StoreError {
    /// Kind of the underlying filesystem error, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            StoreError::Io(e) => Some(e.kind()),
            StoreError::Encode(_) | StoreError::Decode(_) => None,
        }
    }

    /// True when the backing file (or a parent directory) does not exist
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}

impl FixSuggestion for StoreError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            StoreError::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => Some("Call create() before save/load, or check the path"),
                io::ErrorKind::AlreadyExists => {
                    Some("Remove the file or use CreatePolicy::Truncate")
                }
                io::ErrorKind::PermissionDenied => Some("Check file and directory permissions"),
                _ => Some("Check file path and available disk space"),
            },
            StoreError::Encode(_) => Some("Check the value is representable by the codec"),
            StoreError::Decode(_) => {
                Some("File content does not match the codec format (partial or foreign record?)")
            }
        }
    }
}
