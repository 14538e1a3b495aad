//! Collection item types

use serde::Deserialize;

use crate::de::null_as_default;
use crate::request::Request;

/// A node in the collection tree.
///
/// An item with a `request` is a leaf request; an item with children is a
/// folder. Exports occasionally carry both, and each part is converted on
/// its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Display name, used for the output file or directory name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Request definition, if this item is a leaf request
    #[serde(default)]
    pub request: Option<Request>,
    /// Nested items, if this item is a folder
    #[serde(rename = "item", default, deserialize_with = "null_as_default")]
    pub children: Vec<Self>,
}

impl Item {
    /// Returns true if this item carries a request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.request.is_some()
    }

    /// Returns true if this item has nested items.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}
