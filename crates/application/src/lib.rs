//! Courier Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for file access and document loading)
//! - Conversion use cases
//! - Conversion reports and error handling

pub mod error;
pub mod ports;
pub mod report;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult, ConversionError};
pub use report::{
    BatchReport, BatchStats, ConversionSummary, DocumentKind, DocumentOutcome, ItemFailure,
};
pub use use_cases::{ConvertBatch, ConvertBatchInput, ConvertCollection, ConvertEnvironment};
