//! Configuration loader and schema types.
//!
//! Settings drive the remote API endpoint, the authorize flow, pipeline
//! timings and the log sink.

mod load;
mod schema;

pub use schema::*;
