//! Enrichment resolver: batched tag/field lookup with not-found excision.
//!
//! A chunk's working set ("pipe map") maps each descriptor id to its slot in
//! the chunk. The batch-describe endpoint rejects the whole request when a
//! single id no longer exists, naming the offender only as the trailing
//! token of the error message. The resolver excises exactly that id and
//! retries with the reduced set until the call succeeds or the set is empty,
//! then merges the returned tags and sentinel-prefixed fields onto the
//! surviving descriptors in place.

use crate::client::PipelineApi;
use crate::resilience::RetryPolicy;
use crate::types::{DescribeOutput, PipelineDescriptor, Tag};
use crate::{Error, Result};
use std::collections::HashMap;

/// Remote error code meaning one id in the describe batch no longer exists.
pub const NOT_FOUND_CODE: &str = "PipelineNotFound";

/// Remote field keys carrying this prefix are provider-internal metadata;
/// they are copied onto the descriptor with the prefix stripped. Fields
/// without it are ignored.
pub const SENTINEL_PREFIX: &str = "@";

/// Extract the offending id from a not-found error message.
///
/// The control plane encodes the id as the last whitespace-separated token
/// of otherwise free text ("pipeline id not found: df-123"). This parsing is
/// inherently fragile, so it lives here alone and callers must verify the
/// token against the current working set before acting on it.
pub fn parse_offending_id(message: &str) -> Option<&str> {
    message.split_whitespace().last()
}

/// Resolve one chunk: describe through the retry policy, excise ids the
/// remote reports missing, merge tags/fields onto the survivors.
///
/// The chunk is always handed back, mutated in place; the accompanying
/// `Result` reports whether resolution completed. On error the remaining
/// descriptors are simply left unenriched — sibling chunks are unaffected.
pub async fn resolve_chunk(
    client: &dyn PipelineApi,
    retry: &RetryPolicy,
    not_found_code: &str,
    mut chunk: Vec<PipelineDescriptor>,
) -> (Vec<PipelineDescriptor>, Result<()>) {
    let mut pipe_map: HashMap<String, usize> = chunk
        .iter()
        .enumerate()
        .map(|(slot, d)| (d.id.clone(), slot))
        .collect();

    let output = loop {
        if pipe_map.is_empty() {
            // every id was excised (or the chunk was empty): no remote call
            break DescribeOutput::empty();
        }

        let ids: Vec<String> = pipe_map.keys().cloned().collect();
        match retry.invoke(|| client.describe_pipelines(&ids)).await {
            Ok(output) => break output,
            Err(err) if err.code() == Some(not_found_code) => {
                let message = err.remote_message().unwrap_or_default();
                match parse_offending_id(message) {
                    Some(id) if pipe_map.contains_key(id) => {
                        pipe_map.remove(id);
                        tracing::debug!(id, "excised missing pipeline from working set");
                    }
                    parsed => {
                        // the token is stale or unparseable; removing nothing
                        // would loop forever, so fail the chunk fast
                        let err = Error::contract(format!(
                            "not-found rejection named '{}', which is not in the working set \
                             (message: {:?})",
                            parsed.unwrap_or("<empty>"),
                            message,
                        ));
                        return (chunk, Err(err));
                    }
                }
            }
            Err(err) => return (chunk, Err(err)),
        }
    };

    merge_descriptions(&mut chunk, &pipe_map, output);
    (chunk, Ok(()))
}

/// Attach tags and sentinel-stripped fields to the descriptors still in the
/// working set. Descriptions for excised ids never appear; anything else
/// outside the set is skipped.
fn merge_descriptions(
    chunk: &mut [PipelineDescriptor],
    pipe_map: &HashMap<String, usize>,
    output: DescribeOutput,
) {
    for description in output.pipeline_description_list {
        let Some(&slot) = pipe_map.get(&description.pipeline_id) else {
            tracing::debug!(
                id = %description.pipeline_id,
                "description for id outside working set, skipping"
            );
            continue;
        };
        let descriptor = &mut chunk[slot];
        descriptor.tags = Some(
            description
                .tags
                .into_iter()
                .map(|t| Tag::new(t.key, t.value))
                .collect(),
        );
        for field in description.fields {
            if let Some(key) = field.key.strip_prefix(SENTINEL_PREFIX) {
                descriptor.fields.insert(key.to_string(), field.string_value);
            }
        }
    }
}
