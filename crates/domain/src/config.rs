//! Conversion settings

use std::path::PathBuf;

use crate::sanitize::sanitize_name;

/// Output roots and file naming used by every conversion step.
///
/// The defaults reproduce the usual layout: `parsed-collections/` and
/// `parsed-environments/` under the working directory, `.http` request
/// files and `.env` environment files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Root directory for converted collections
    pub collections_output: PathBuf,
    /// Root directory for converted environments
    pub environments_output: PathBuf,
    /// Suffix an input file name must end with to be converted
    pub input_suffix: String,
    /// Suffix stripped from collection file names to name their output directory
    pub collection_suffix: String,
    /// Extension of request files, without the dot
    pub request_extension: String,
    /// Extension of environment files, without the dot
    pub environment_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            collections_output: PathBuf::from("parsed-collections"),
            environments_output: PathBuf::from("parsed-environments"),
            input_suffix: ".json".to_string(),
            collection_suffix: ".postman_collection.json".to_string(),
            request_extension: "http".to_string(),
            environment_extension: "env".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Replaces both output roots.
    #[must_use]
    pub fn with_output_roots(
        mut self,
        collections: impl Into<PathBuf>,
        environments: impl Into<PathBuf>,
    ) -> Self {
        self.collections_output = collections.into();
        self.environments_output = environments.into();
        self
    }

    /// Returns true if a directory entry with this name should be converted.
    #[must_use]
    pub fn is_input_file(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.input_suffix)
    }

    /// Output directory name for a collection input file.
    ///
    /// `My API.postman_collection.json` becomes `My API`; a file without the
    /// collection suffix keeps its whole sanitized name.
    #[must_use]
    pub fn collection_dir_name(&self, file_name: &str) -> String {
        let sanitized = sanitize_name(file_name);
        match sanitized.strip_suffix(&self.collection_suffix) {
            Some(stem) => stem.to_string(),
            None => sanitized,
        }
    }

    /// File name of the `.http` file for a request item.
    #[must_use]
    pub fn request_file_name(&self, item_name: &str) -> String {
        format!("{}.{}", sanitize_name(item_name), self.request_extension)
    }

    /// File name of the `.env` file for an environment.
    #[must_use]
    pub fn environment_file_name(&self, environment_name: &str) -> String {
        format!(
            "{}.{}",
            sanitize_name(environment_name),
            self.environment_extension
        )
    }
}
