//! Bulk delete action with per-item failure isolation.

use crate::batch;
use crate::client::PipelineApi;
use crate::resilience::RetryPolicy;
use crate::types::PipelineDescriptor;
use std::sync::Arc;

/// One resource whose delete call failed, recorded for operator visibility.
#[derive(Debug, Clone)]
pub struct DeleteFailure {
    pub id: String,
    pub error: String,
}

/// Outcome of a bulk delete run. The run itself never fails; every resource
/// is attempted and per-item failures are collected here.
#[derive(Debug, Clone, Default)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub failures: Vec<DeleteFailure>,
}

impl DeleteReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Deletes pipelines one by one across a bounded worker pool.
///
/// A single resource's failure is logged and recorded, never allowed to
/// abort the remaining deletes. Throttled calls go through the same retry
/// policy as describe; `without_retry()` restores the legacy behavior of
/// surfacing throttles as plain failures.
pub struct DeleteAction {
    client: Arc<dyn PipelineApi>,
    retry: Option<RetryPolicy>,
    workers: usize,
}

impl DeleteAction {
    pub const DEFAULT_WORKERS: usize = 2;

    pub fn new(client: Arc<dyn PipelineApi>) -> Self {
        Self {
            client,
            retry: Some(RetryPolicy::default()),
            workers: Self::DEFAULT_WORKERS,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry = None;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        // a zero-width pool could make process() fail, which it must not
        self.workers = workers.max(1);
        self
    }

    /// Permission strings required by the remote API for this action,
    /// declared for static authorization audits (not enforced here).
    pub fn permissions(&self) -> &'static [&'static str] {
        &["pipeline:DeletePipeline"]
    }

    /// Issue a delete for every resource, isolating per-item failures.
    pub async fn process(&self, resources: &[PipelineDescriptor]) -> DeleteReport {
        let ids: Vec<String> = resources.iter().map(|r| r.id.clone()).collect();

        let results = batch::run_settled(ids.clone(), self.workers, |id| async move {
            match &self.retry {
                Some(retry) => retry.invoke(|| self.client.delete_pipeline(&id)).await,
                None => self.client.delete_pipeline(&id).await,
            }
        })
        .await
        // workers >= 1 by construction, run_settled cannot reject the call
        .unwrap_or_default();

        let mut report = DeleteReport::default();
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(()) => {
                    tracing::debug!(id = %id, "deleted pipeline");
                    report.deleted.push(id);
                }
                Err(err) => {
                    tracing::error!(id = %id, error = %err, "failed to delete pipeline");
                    report.failures.push(DeleteFailure {
                        id,
                        error: err.to_string(),
                    });
                }
            }
        }
        report
    }
}
