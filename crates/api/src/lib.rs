//! Raw API description records.
//!
//! These are the flat element records produced by the API description reader
//! (after fixups have been applied). They are consumed once by the hierarchy
//! builder in `bindscope-core` and never mutated by it.

pub mod error;
pub mod models;

pub use error::{ApiError, ApiResult};
pub use models::*;
