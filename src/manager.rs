//! Orchestration facade: the resource-manager surface over enrichment and
//! the delete action.

use crate::batch;
use crate::client::PipelineApi;
use crate::delete::DeleteAction;
use crate::enrich::{self, NOT_FOUND_CODE};
use crate::resilience::RetryPolicy;
use crate::types::PipelineDescriptor;
use crate::Result;
use std::sync::Arc;

/// Tunables for the enrichment path. Defaults mirror the control plane's
/// batch limit (20 ids per describe) and a conservative pool of 2 workers.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub chunk_size: usize,
    pub workers: usize,
    pub retry: RetryPolicy,
    pub not_found_code: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            chunk_size: 20,
            workers: 2,
            retry: RetryPolicy::default(),
            not_found_code: NOT_FOUND_CODE.to_string(),
        }
    }
}

impl EnrichConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_not_found_code(mut self, code: impl Into<String>) -> Self {
        self.not_found_code = code.into();
        self
    }
}

/// Entry point tying the chunker, dispatcher and resolver together.
pub struct PipelineManager {
    client: Arc<dyn PipelineApi>,
    config: EnrichConfig,
}

impl PipelineManager {
    pub fn new(client: Arc<dyn PipelineApi>) -> Self {
        Self {
            client,
            config: EnrichConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EnrichConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enrich every descriptor with tags and provider-internal fields.
    ///
    /// The full original list always comes back, in its original order. Ids
    /// the control plane reports missing simply stay unenriched, as do the
    /// descriptors of a chunk whose resolution failed outright — that chunk
    /// is logged and abandoned without blocking its siblings. Only caller
    /// misuse (invalid chunk size or worker count) fails the whole call.
    pub async fn augment(
        &self,
        resources: Vec<PipelineDescriptor>,
    ) -> Result<Vec<PipelineDescriptor>> {
        let total = resources.len();
        let parts = batch::chunks(resources, self.config.chunk_size)?;

        let resolved = batch::run(parts, self.config.workers, |chunk| async move {
            Ok(enrich::resolve_chunk(
                self.client.as_ref(),
                &self.config.retry,
                &self.config.not_found_code,
                chunk,
            )
            .await)
        })
        .await?;

        let mut out = Vec::with_capacity(total);
        for (chunk, outcome) in resolved {
            if let Err(err) = outcome {
                tracing::warn!(
                    error = %err,
                    descriptors = chunk.len(),
                    "chunk enrichment abandoned, descriptors returned unenriched"
                );
            }
            out.extend(chunk);
        }
        Ok(out)
    }

    /// Bulk delete action over the same client, sharing the retry policy
    /// and worker count of this manager.
    pub fn delete_action(&self) -> DeleteAction {
        DeleteAction::new(self.client.clone())
            .with_retry(self.config.retry.clone())
            .with_workers(self.config.workers)
    }
}
