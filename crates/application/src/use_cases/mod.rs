//! Application use cases (conversion orchestration).

mod convert_batch;
mod convert_collection;
mod convert_environment;

pub use convert_batch::*;
pub use convert_collection::*;
pub use convert_environment::*;
