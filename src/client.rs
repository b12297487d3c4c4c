//! Control-plane client seam.
//!
//! The two remote endpoints this crate drives are abstracted behind a trait
//! so the enrichment and delete paths can be exercised against scripted
//! in-memory implementations in tests. The production HTTP implementation
//! lives in [`crate::transport::http`].

use crate::types::DescribeOutput;
use crate::Result;
use async_trait::async_trait;

/// Remote control-plane surface for pipeline resources.
#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Batch-describe: returns tag/field metadata for each id.
    ///
    /// Fails with a remote `PipelineNotFound`-coded error when any id in the
    /// batch no longer exists (the offending id is only present as the
    /// trailing token of the error message), with a throttle-coded error
    /// under rate limiting, or with other provider errors.
    async fn describe_pipelines(&self, ids: &[String]) -> Result<DescribeOutput>;

    /// Delete a single pipeline by id.
    async fn delete_pipeline(&self, id: &str) -> Result<()>;
}
