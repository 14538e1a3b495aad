//! Postman Import Module
//!
//! This module loads Postman Collection v2.x and Environment exports.

mod loader;

pub use loader::{DocumentFormat, PostmanLoader};
