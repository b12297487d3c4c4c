//! Batch partitioning and bounded-concurrency dispatch.

pub mod chunk;
pub mod dispatch;

pub use chunk::chunks;
pub use dispatch::{run, run_settled};
