//! Postman collection documents.
//!
//! A collection is an ordered tree of [`Item`]s. Only the fields needed to
//! produce `.http` files are modelled; `info`, `variable`, `auth` and
//! `event` blocks are ignored when decoding.

mod item;

pub use item::Item;

use serde::Deserialize;

use crate::de::null_as_default;

/// Root of an exported collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CollectionDocument {
    /// Top-level items, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: Vec<Item>,
}

impl CollectionDocument {
    /// Counts `(requests, folders)` across the whole tree.
    #[must_use]
    pub fn count_items(&self) -> (usize, usize) {
        count_items(&self.item)
    }
}

fn count_items(items: &[Item]) -> (usize, usize) {
    let mut requests = 0;
    let mut folders = 0;

    for item in items {
        if item.is_request() {
            requests += 1;
        }
        if item.is_folder() {
            folders += 1;
            let (sub_req, sub_fold) = count_items(&item.children);
            requests += sub_req;
            folders += sub_fold;
        }
    }

    (requests, folders)
}
