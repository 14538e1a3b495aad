//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod document_loader;
mod file_system;

pub use document_loader::{DocumentLoader, LoadError};
pub use file_system::{FileSystem, FileSystemError};
