//! Application error types

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::{FileSystemError, LoadError};

/// Errors that stop a whole batch.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// An input directory could not be listed.
    #[error("cannot read input directory {}: {source}", .path.display())]
    InputDir {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying failure
        source: FileSystemError,
    },

    /// An output root could not be created.
    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputRoot {
        /// Directory that was created
        path: PathBuf,
        /// Underlying failure
        source: FileSystemError,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Errors confined to a single document or item.
///
/// These are collected into the conversion report; processing continues
/// with the next item or document.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Input file
        path: PathBuf,
        /// Underlying failure
        source: FileSystemError,
    },

    /// The input file could not be decoded.
    #[error("failed to parse {}: {message}", .path.display())]
    Decode {
        /// Input file
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// An output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was created
        path: PathBuf,
        /// Underlying failure
        source: FileSystemError,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was written
        path: PathBuf,
        /// Underlying failure
        source: FileSystemError,
    },
}

impl ConversionError {
    /// Maps a loader failure for the given input file.
    #[must_use]
    pub fn from_load(path: &Path, error: LoadError) -> Self {
        match error {
            LoadError::Read(source) => Self::Read {
                path: path.to_path_buf(),
                source,
            },
            LoadError::InvalidJson(message) => Self::Decode {
                path: path.to_path_buf(),
                message,
            },
        }
    }

    /// Path of the file or directory involved.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
