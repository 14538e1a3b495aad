//! Import Module
//!
//! This module reads exported documents from external tools and decodes
//! them into Courier domain types.

pub mod postman;

pub use postman::{DocumentFormat, PostmanLoader};
