//! Postman document loader.

use std::path::Path;

use courier_application::ports::{DocumentLoader, FileSystem, LoadError};
use courier_domain::{CollectionDocument, EnvironmentDocument};
use serde::de::DeserializeOwned;
use tracing::{Level, debug, enabled};

/// Detected shape of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Postman Collection (has an `item` array or an `info` block)
    PostmanCollection,
    /// Postman Environment (has `name` and `values` but no `info`)
    PostmanEnvironment,
    /// Unknown or unsupported format
    Unknown,
}

impl DocumentFormat {
    /// Detect the format of a JSON value.
    #[must_use]
    pub fn detect(json: &serde_json::Value) -> Self {
        if json.get("info").is_some() || json.get("item").is_some() {
            return Self::PostmanCollection;
        }

        if json.get("name").is_some() && json.get("values").is_some() {
            return Self::PostmanEnvironment;
        }

        Self::Unknown
    }
}

/// Loads Postman exports through a [`FileSystem`].
///
/// Decoding is lenient: a document only fails to load when it is not JSON
/// or when a structural field has the wrong type. A document whose shape
/// does not look like the expected kind still loads (most fields default),
/// but the mismatch is logged.
#[derive(Debug, Clone)]
pub struct PostmanLoader<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> PostmanLoader<F> {
    /// Creates a new loader.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    async fn load<T: DeserializeOwned>(
        &self,
        path: &Path,
        expected: DocumentFormat,
    ) -> Result<T, LoadError> {
        let content = self.fs.read_file_string(path).await?;

        // Verbatim fields keep their source text only when decoded from `content`.
        let document =
            serde_json::from_str(&content).map_err(|e| LoadError::InvalidJson(e.to_string()))?;

        if enabled!(Level::DEBUG)
            && let Ok(json) = serde_json::from_str::<serde_json::Value>(&content)
        {
            let format = DocumentFormat::detect(&json);
            if format != expected {
                debug!(path = %path.display(), ?format, ?expected, "Unexpected document shape");
            }
        }

        Ok(document)
    }
}

impl<F: FileSystem> DocumentLoader for PostmanLoader<F> {
    async fn load_collection(&self, path: &Path) -> Result<CollectionDocument, LoadError> {
        self.load(path, DocumentFormat::PostmanCollection).await
    }

    async fn load_environment(&self, path: &Path) -> Result<EnvironmentDocument, LoadError> {
        self.load(path, DocumentFormat::PostmanEnvironment).await
    }
}
