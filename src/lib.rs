pub mod codec;
pub mod error;
pub mod models;
pub mod naming;
pub mod reduce;

pub use error::MergeError;
pub use models::{KeyValue, ReduceFunction};
pub use reduce::merge;
