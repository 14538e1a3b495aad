//! Convert environment use case.

use courier_domain::{ConversionConfig, EnvironmentDocument};
use tracing::debug;

use crate::error::ConversionError;
use crate::ports::FileSystem;
use crate::report::ConversionSummary;

/// Writes an environment as a `.env` file in the environments output root.
pub struct ConvertEnvironment<F: FileSystem> {
    fs: F,
    config: ConversionConfig,
}

impl<F: FileSystem> ConvertEnvironment<F> {
    /// Creates a new `ConvertEnvironment` use case.
    #[must_use]
    pub const fn new(fs: F, config: ConversionConfig) -> Self {
        Self { fs, config }
    }

    /// Executes the use case.
    ///
    /// The file is named after the sanitized environment name, so two
    /// environments with the same name overwrite each other.
    ///
    /// # Errors
    /// Returns an error if the `.env` file cannot be written.
    pub async fn execute(
        &self,
        document: &EnvironmentDocument,
    ) -> Result<ConversionSummary, ConversionError> {
        let path = self
            .config
            .environments_output
            .join(self.config.environment_file_name(&document.name));

        if let Err(source) = self
            .fs
            .write_file(&path, document.to_dotenv().as_bytes())
            .await
        {
            return Err(ConversionError::Write { path, source });
        }
        debug!(path = %path.display(), variables = document.values.len(), "Wrote environment");

        Ok(ConversionSummary {
            variables_written: document.values.len(),
            ..ConversionSummary::new(path)
        })
    }
}
