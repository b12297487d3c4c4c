//! Enrich an inventory of pipeline ids, then delete the ones tagged for
//! cleanup.
//!
//! ```bash
//! PIPELINE_ENDPOINT=https://pipelines.example.com/ \
//! PIPELINE_API_TOKEN=... \
//! cargo run --example bulk_cleanup -- df-001 df-002 df-003
//! ```

use anyhow::Context;
use pipeline_inventory::{
    HttpClientConfig, HttpPipelineClient, PipelineDescriptor, PipelineManager,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint =
        std::env::var("PIPELINE_ENDPOINT").context("PIPELINE_ENDPOINT must be set")?;
    let mut config = HttpClientConfig::new(endpoint);
    if let Ok(token) = std::env::var("PIPELINE_API_TOKEN") {
        config = config.with_api_token(token);
    }

    let client = HttpPipelineClient::new(config)?;
    let manager = PipelineManager::new(Arc::new(client));

    let inventory: Vec<PipelineDescriptor> = std::env::args()
        .skip(1)
        .map(PipelineDescriptor::new)
        .collect();
    anyhow::ensure!(!inventory.is_empty(), "pass at least one pipeline id");

    let enriched = manager.augment(inventory).await?;
    for pipe in &enriched {
        println!(
            "{}  state={}  tags={}",
            pipe.id,
            pipe.field("pipelineState").unwrap_or("-"),
            pipe.tags.as_ref().map(Vec::len).unwrap_or(0),
        );
    }

    let doomed: Vec<PipelineDescriptor> = enriched
        .into_iter()
        .filter(|p| {
            p.tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t.key == "cleanup" && t.value == "true"))
        })
        .collect();

    if doomed.is_empty() {
        println!("nothing tagged cleanup=true");
        return Ok(());
    }

    let report = manager.delete_action().process(&doomed).await;
    println!(
        "deleted {} of {}, {} failures",
        report.deleted_count(),
        doomed.len(),
        report.failure_count(),
    );
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.id, failure.error);
    }
    Ok(())
}
