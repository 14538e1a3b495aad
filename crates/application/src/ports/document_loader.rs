//! Document loader port.

use std::path::Path;

use courier_domain::{CollectionDocument, EnvironmentDocument};

use super::FileSystemError;

/// Error type for loading an exported document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Read(#[from] FileSystemError),

    /// The file is not JSON, or its structure does not match the document.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

/// Reads and decodes exported documents.
pub trait DocumentLoader: Send + Sync {
    /// Loads a collection export.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    fn load_collection(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<CollectionDocument, LoadError>> + Send;

    /// Loads an environment export.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    fn load_environment(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<EnvironmentDocument, LoadError>> + Send;
}
