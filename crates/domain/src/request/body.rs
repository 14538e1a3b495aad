//! Request body field

use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;

use crate::de::{Shape, classify};

/// Body of a request as found in an export.
///
/// Same shape tolerance as [`Url`](super::Url): the text comes from `raw`
/// when the body is an object carrying a `raw` string, otherwise it is the
/// source text of the value itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Box<RawValue>")]
pub enum Body {
    /// Object form with a `raw` string
    Structured {
        /// Body text
        raw: String,
        /// Postman body mode (`raw`, `urlencoded`, `formdata`, ...)
        mode: Option<String>,
    },
    /// Bare string form
    Text(String),
    /// Any other shape, as it appears in the source document
    Verbatim {
        /// Source text of the value
        source: Box<RawValue>,
        /// Postman body mode, when the value is an object declaring one
        mode: Option<String>,
    },
}

impl Body {
    /// Get the body text written after the blank separator line.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Structured { raw, .. } => raw.as_str(),
            Self::Text(text) => text.as_str(),
            Self::Verbatim { source, .. } => source.get(),
        }
    }

    /// Postman body mode, when the export declares one.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        match self {
            Self::Structured { mode, .. } | Self::Verbatim { mode, .. } => mode.as_deref(),
            Self::Text(_) => None,
        }
    }
}

impl From<Box<RawValue>> for Body {
    fn from(source: Box<RawValue>) -> Self {
        match classify(&source) {
            Shape::Text(text) => Self::Text(text),
            Shape::Object(object) => {
                let mode = object
                    .get("mode")
                    .and_then(Value::as_str)
                    .map(str::to_owned);
                match object.get("raw").and_then(Value::as_str) {
                    Some(raw) => Self::Structured {
                        raw: raw.to_owned(),
                        mode,
                    },
                    None => Self::Verbatim { source, mode },
                }
            }
            Shape::Other => Self::Verbatim { source, mode: None },
        }
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Structured { raw, mode },
                Self::Structured {
                    raw: other_raw,
                    mode: other_mode,
                },
            ) => raw == other_raw && mode == other_mode,
            (Self::Text(a), Self::Text(b)) => a == b,
            (
                Self::Verbatim { source, mode },
                Self::Verbatim {
                    source: other_source,
                    mode: other_mode,
                },
            ) => source.get() == other_source.get() && mode == other_mode,
            _ => false,
        }
    }
}

impl Eq for Body {}
