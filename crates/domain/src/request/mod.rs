//! Request definitions carried by collection items.

mod body;
mod url;

pub use body::Body;
pub use url::Url;

use serde::Deserialize;

use crate::de::null_as_default;

/// A request definition.
///
/// Method and headers are kept exactly as exported; no HTTP validation or
/// normalization happens at any stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// HTTP method, verbatim
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    /// Request URL; `None` when missing or `null`
    #[serde(default)]
    pub url: Option<Url>,
    /// Headers in export order, duplicates included
    #[serde(rename = "header", default, deserialize_with = "null_as_default")]
    pub headers: Vec<Header>,
    /// Request body; `None` when missing or `null`
    #[serde(default)]
    pub body: Option<Body>,
}

/// Request header
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Header {
    /// Header name
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// Header value
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl Header {
    /// Creates a header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
