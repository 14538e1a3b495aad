//! Courier Domain - Core conversion types
//!
//! This crate defines the decoded Postman documents and the pure text
//! transformations applied to them. All types here are pure Rust with no
//! I/O dependencies.

mod de;

pub mod collection;
pub mod config;
pub mod environment;
pub mod http_file;
pub mod request;
pub mod sanitize;

pub use collection::{CollectionDocument, Item};
pub use config::ConversionConfig;
pub use environment::{EnvironmentDocument, EnvironmentVariable};
pub use http_file::render_request;
pub use request::{Body, Header, Request, Url};
pub use sanitize::sanitize_name;
