//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod import;
pub mod persistence;

pub use import::{DocumentFormat, PostmanLoader};
pub use persistence::TokioFileSystem;
