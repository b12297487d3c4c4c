//! Core type definitions: inventory descriptors and provider wire shapes.

pub mod describe;
pub mod descriptor;

pub use describe::{DescribeOutput, PipelineDescription, RemoteField, RemoteTag};
pub use descriptor::{PipelineDescriptor, Tag};
