//! # pipeline-inventory
//!
//! Batched metadata enrichment and bulk deletion for cloud data-pipeline
//! inventories.
//!
//! ## Overview
//!
//! The control plane's batch-describe endpoint returns tag and field
//! metadata for up to 20 pipeline ids per call — and rejects the *entire*
//! batch when a single id no longer exists, naming the offender only in the
//! error message text. This crate makes working over that endpoint robust:
//! it partitions an inventory into API-sized chunks, fetches them on a
//! bounded worker pool, recovers from partial-existence rejections by
//! excising exactly the missing id and retrying the remainder, and rides out
//! rate limiting with bounded exponential backoff. A companion bulk-delete
//! action attempts every resource and isolates per-item failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipeline_inventory::{
//!     HttpClientConfig, HttpPipelineClient, PipelineDescriptor, PipelineManager,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pipeline_inventory::Result<()> {
//!     let client = HttpPipelineClient::new(
//!         HttpClientConfig::new("https://pipelines.example.com/")
//!             .with_api_token("token"),
//!     )?;
//!     let manager = PipelineManager::new(Arc::new(client));
//!
//!     let bare = vec![PipelineDescriptor::new("df-001")];
//!     let enriched = manager.augment(bare).await?;
//!     for pipe in &enriched {
//!         println!("{}: state={:?}", pipe.id, pipe.field("pipelineState"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Descriptor and provider wire types |
//! | [`client`] | Control-plane trait ([`client::PipelineApi`]) |
//! | [`transport`] | reqwest-backed HTTP client |
//! | [`resilience`] | Throttle-aware retry policy |
//! | [`batch`] | Chunking and bounded-concurrency dispatch |
//! | [`enrich`] | Not-found excision loop and tag/field merge |
//! | [`delete`] | Bulk delete action with failure isolation |
//! | [`manager`] | Orchestration facade |

pub mod batch;
pub mod client;
pub mod delete;
pub mod enrich;
pub mod manager;
pub mod resilience;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::PipelineApi;
pub use delete::{DeleteAction, DeleteFailure, DeleteReport};
pub use manager::{EnrichConfig, PipelineManager};
pub use resilience::RetryPolicy;
pub use transport::{HttpClientConfig, HttpPipelineClient};
pub use types::{DescribeOutput, PipelineDescription, PipelineDescriptor, Tag};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
