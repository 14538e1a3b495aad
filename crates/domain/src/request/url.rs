//! Request URL field

use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;

use crate::de::{Shape, classify};

/// URL of a request as found in an export.
///
/// Exports write either a bare string or an object with a `raw` string and
/// split `host`/`path` segments. Any other shape keeps its source text and
/// is rendered exactly as written, so decoding a URL never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Box<RawValue>")]
pub enum Url {
    /// Object form with a `raw` string
    Structured {
        /// The full URL text
        raw: String,
        /// Host segments, e.g. `["api", "example", "com"]`
        host: Vec<String>,
        /// Path segments, e.g. `["users", ":id"]`
        path: Vec<String>,
    },
    /// Bare string form
    Text(String),
    /// Any other shape, as it appears in the source document
    Verbatim(Box<RawValue>),
}

impl Url {
    /// Get the raw URL text used for the request line.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Structured { raw, .. } => raw.as_str(),
            Self::Text(text) => text.as_str(),
            Self::Verbatim(source) => source.get(),
        }
    }
}

impl From<Box<RawValue>> for Url {
    fn from(source: Box<RawValue>) -> Self {
        match classify(&source) {
            Shape::Text(text) => Self::Text(text),
            Shape::Object(object) => match object.get("raw").and_then(Value::as_str) {
                Some(raw) => Self::Structured {
                    raw: raw.to_owned(),
                    host: object.get("host").map(segments).unwrap_or_default(),
                    path: object.get("path").map(segments).unwrap_or_default(),
                },
                None => Self::Verbatim(source),
            },
            Shape::Other => Self::Verbatim(source),
        }
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Structured { raw, host, path },
                Self::Structured {
                    raw: other_raw,
                    host: other_host,
                    path: other_path,
                },
            ) => raw == other_raw && host == other_host && path == other_path,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Verbatim(a), Self::Verbatim(b)) => a.get() == b.get(),
            _ => false,
        }
    }
}

impl Eq for Url {}

/// Collects string segments from a string, an array of strings, or an array
/// of `{ "value": ... }` segment objects. Other entries are dropped.
fn segments(value: &Value) -> Vec<String> {
    match value {
        Value::String(segment) => vec![segment.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(object) => object.get("value"),
                other => Some(other),
            })
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}
