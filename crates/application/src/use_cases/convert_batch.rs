//! Convert batch use case.

use std::path::{Path, PathBuf};

use courier_domain::ConversionConfig;
use tracing::{debug, info, warn};

use crate::error::{ApplicationError, ApplicationResult, ConversionError};
use crate::ports::{DocumentLoader, FileSystem};
use crate::report::{BatchReport, ConversionSummary, DocumentKind, DocumentOutcome, file_name};

use super::{ConvertCollection, ConvertEnvironment};

/// Input for converting a batch of exports.
#[derive(Debug, Clone)]
pub struct ConvertBatchInput {
    /// Directory holding collection exports.
    pub collections_dir: PathBuf,
    /// Directory holding environment exports.
    pub environments_dir: PathBuf,
}

/// Converts every export found in two input directories.
///
/// Documents are processed one at a time, collections first. A document
/// that cannot be read, decoded or written is reported and skipped; only
/// failures to list an input directory or to create an output root stop the
/// batch.
pub struct ConvertBatch<F: FileSystem, L: DocumentLoader> {
    fs: F,
    loader: L,
    config: ConversionConfig,
    collections: ConvertCollection<F>,
    environments: ConvertEnvironment<F>,
}

impl<F: FileSystem + Clone, L: DocumentLoader> ConvertBatch<F, L> {
    /// Creates a new `ConvertBatch` use case.
    #[must_use]
    pub fn new(fs: F, loader: L, config: ConversionConfig) -> Self {
        Self {
            collections: ConvertCollection::new(fs.clone(), config.clone()),
            environments: ConvertEnvironment::new(fs.clone(), config.clone()),
            fs,
            loader,
            config,
        }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// - Returns error if an input directory cannot be listed
    /// - Returns error if an output root cannot be created
    pub async fn execute(&self, input: &ConvertBatchInput) -> ApplicationResult<BatchReport> {
        let collection_files = self.list_documents(&input.collections_dir).await?;
        let environment_files = self.list_documents(&input.environments_dir).await?;

        for root in [&self.config.collections_output, &self.config.environments_output] {
            self.fs
                .create_dir_all(root)
                .await
                .map_err(|source| ApplicationError::OutputRoot {
                    path: root.clone(),
                    source,
                })?;
        }

        let mut report = BatchReport::default();

        for source in collection_files {
            let result = self.convert_collection_file(&source).await;
            report
                .outcomes
                .push(log_outcome(DocumentKind::Collection, source, result));
        }

        for source in environment_files {
            let result = self.convert_environment_file(&source).await;
            report
                .outcomes
                .push(log_outcome(DocumentKind::Environment, source, result));
        }

        Ok(report)
    }

    /// Lists the input files of a directory, without recursing.
    async fn list_documents(&self, dir: &Path) -> ApplicationResult<Vec<PathBuf>> {
        let entries = self
            .fs
            .read_dir(dir)
            .await
            .map_err(|source| ApplicationError::InputDir {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut documents = Vec::new();
        for path in entries {
            if self.config.is_input_file(&file_name(&path)) && !self.fs.is_dir(&path).await {
                documents.push(path);
            }
        }
        Ok(documents)
    }

    async fn convert_collection_file(
        &self,
        source: &Path,
    ) -> Result<ConversionSummary, ConversionError> {
        let document = self
            .loader
            .load_collection(source)
            .await
            .map_err(|e| ConversionError::from_load(source, e))?;

        let (requests, folders) = document.count_items();
        debug!(source = %source.display(), requests, folders, "Loaded collection");

        let output_dir = self
            .config
            .collections_output
            .join(self.config.collection_dir_name(&file_name(source)));

        if let Err(e) = self.fs.create_dir_all(&output_dir).await {
            return Err(ConversionError::CreateDir {
                path: output_dir,
                source: e,
            });
        }

        Ok(self.collections.execute(&document, &output_dir).await)
    }

    async fn convert_environment_file(
        &self,
        source: &Path,
    ) -> Result<ConversionSummary, ConversionError> {
        let document = self
            .loader
            .load_environment(source)
            .await
            .map_err(|e| ConversionError::from_load(source, e))?;

        self.environments.execute(&document).await
    }
}

fn log_outcome(
    kind: DocumentKind,
    source: PathBuf,
    result: Result<ConversionSummary, ConversionError>,
) -> DocumentOutcome {
    let outcome = DocumentOutcome {
        kind,
        source,
        result,
    };

    match &outcome.result {
        Ok(summary) if summary.is_complete() => {
            info!("Converted {kind}: {}", outcome.file_name());
        }
        Ok(summary) => {
            warn!(
                failures = summary.failures.len(),
                "Converted {kind} with errors: {}",
                outcome.file_name()
            );
        }
        Err(error) => {
            warn!(%error, "Skipped {kind}: {}", outcome.file_name());
        }
    }

    outcome
}
