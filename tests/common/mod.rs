//! Scripted in-memory control plane for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pipeline_inventory::types::{DescribeOutput, PipelineDescription, RemoteField, RemoteTag};
use pipeline_inventory::{Error, PipelineApi, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Fake `PipelineApi` driven by a catalog plus failure knobs.
///
/// - `missing` ids trigger a whole-batch not-found rejection naming one
///   offender in the message, exactly like the real control plane.
/// - `throttle_next` makes the next N describe calls fail with `Throttled`.
/// - `deny` ids poison their whole batch with `AccessDenied`.
/// - `fail_delete` ids make `delete_pipeline` fail for that id only.
#[derive(Default)]
pub struct ScriptedApi {
    pub catalog: HashMap<String, PipelineDescription>,
    pub missing: Mutex<HashSet<String>>,
    pub throttle_next: Mutex<u32>,
    pub deny: HashSet<String>,
    pub fail_delete: HashSet<String>,
    /// Per-id count of delete calls that fail with `Throttled` before one
    /// succeeds.
    pub throttle_delete: Mutex<HashMap<String, u32>>,
    /// Message override for the not-found rejection, to script malformed or
    /// stale tokens.
    pub not_found_message: Option<String>,

    pub describe_calls: Mutex<Vec<Vec<String>>>,
    pub delete_calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pipeline with tags and raw (sentinel-prefixed) fields.
    pub fn with_pipeline(
        mut self,
        id: &str,
        tags: &[(&str, &str)],
        fields: &[(&str, &str)],
    ) -> Self {
        self.catalog.insert(
            id.to_string(),
            PipelineDescription {
                pipeline_id: id.to_string(),
                name: None,
                tags: tags
                    .iter()
                    .map(|(k, v)| RemoteTag {
                        key: k.to_string(),
                        value: v.to_string(),
                    })
                    .collect(),
                fields: fields
                    .iter()
                    .map(|(k, v)| RemoteField {
                        key: k.to_string(),
                        string_value: v.to_string(),
                    })
                    .collect(),
            },
        );
        self
    }

    pub fn with_missing(self, id: &str) -> Self {
        self.missing.lock().unwrap().insert(id.to_string());
        self
    }

    pub fn with_throttles(self, n: u32) -> Self {
        *self.throttle_next.lock().unwrap() = n;
        self
    }

    pub fn with_denied(mut self, id: &str) -> Self {
        self.deny.insert(id.to_string());
        self
    }

    pub fn with_failing_delete(mut self, id: &str) -> Self {
        self.fail_delete.insert(id.to_string());
        self
    }

    pub fn with_throttled_deletes(self, id: &str, n: u32) -> Self {
        self.throttle_delete
            .lock()
            .unwrap()
            .insert(id.to_string(), n);
        self
    }

    pub fn with_not_found_message(mut self, message: &str) -> Self {
        self.not_found_message = Some(message.to_string());
        self
    }

    pub fn describe_call_count(&self) -> usize {
        self.describe_calls.lock().unwrap().len()
    }

    pub fn describe_calls(&self) -> Vec<Vec<String>> {
        self.describe_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PipelineApi for ScriptedApi {
    async fn describe_pipelines(&self, ids: &[String]) -> Result<DescribeOutput> {
        let mut sorted: Vec<String> = ids.to_vec();
        sorted.sort();
        self.describe_calls.lock().unwrap().push(sorted.clone());

        {
            let mut throttles = self.throttle_next.lock().unwrap();
            if *throttles > 0 {
                *throttles -= 1;
                return Err(Error::remote("Throttled", "Rate exceeded for account"));
            }
        }

        if let Some(denied) = sorted.iter().find(|id| self.deny.contains(*id)) {
            return Err(Error::remote(
                "AccessDenied",
                format!("not authorized to describe {}", denied),
            ));
        }

        let missing = self.missing.lock().unwrap();
        if let Some(offender) = sorted.iter().find(|id| missing.contains(*id)) {
            let message = self
                .not_found_message
                .clone()
                .unwrap_or_else(|| format!("pipeline id not found: {}", offender));
            return Err(Error::remote("PipelineNotFound", message));
        }

        Ok(DescribeOutput {
            pipeline_description_list: ids
                .iter()
                .filter_map(|id| self.catalog.get(id).cloned())
                .collect(),
        })
    }

    async fn delete_pipeline(&self, id: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(id.to_string());
        {
            let mut throttled = self.throttle_delete.lock().unwrap();
            if let Some(n) = throttled.get_mut(id) {
                if *n > 0 {
                    *n -= 1;
                    return Err(Error::remote("Throttled", "Rate exceeded for account"));
                }
            }
        }
        if self.fail_delete.contains(id) {
            return Err(Error::remote(
                "AccessDenied",
                format!("not authorized to delete {}", id),
            ));
        }
        Ok(())
    }
}
