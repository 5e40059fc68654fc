// ABOUTME: Error types for fingerprinting operations.
// ABOUTME: Provides FingerprintError with Open, Read, and UnknownAlgorithm variants.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while fingerprinting a file.
///
/// Sanitization has no error type: body-not-found is a defined
/// empty-string result and parse recovery belongs to the HTML parser.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The file could not be opened (missing, permission denied).
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed partway through the stream.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The algorithm name did not match any supported algorithm.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl FingerprintError {
    /// Creates an Open error for the given path.
    pub fn open(path: impl AsRef<Path>, source: io::Error) -> Self {
        FingerprintError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a Read error for the given path.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        FingerprintError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
