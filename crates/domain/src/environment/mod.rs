//! Postman environment documents and `.env` rendering.

use serde::Deserialize;

use crate::de::null_as_default;

/// Root of an exported environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvironmentDocument {
    /// Environment name, used for the output file name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Variables in export order, duplicates included
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<EnvironmentVariable>,
}

/// A single environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable key/name
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// Variable value
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl EnvironmentVariable {
    /// Creates a variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl EnvironmentDocument {
    /// Render the variables as `.env` text, one `KEY=VALUE` line each.
    ///
    /// Keys and values are written as is. A value containing a newline
    /// therefore spans several lines of output.
    #[must_use]
    pub fn to_dotenv(&self) -> String {
        self.values
            .iter()
            .map(|variable| format!("{}={}\n", variable.key, variable.value))
            .collect()
    }
}
