use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single tag attached to a resource after enrichment.
///
/// Serializes with capitalized keys (`Key`/`Value`) to match the inventory
/// format downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One pipeline resource in the inventory.
///
/// Descriptors enter enrichment bare (`id`, maybe `name`) and are mutated in
/// place: `tags` is populated from the describe call and provider-internal
/// fields land in `fields` with their sentinel prefix stripped. Enrichment
/// never creates or drops descriptors, only mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDescriptor {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `None` until the descriptor has been enriched.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Provider-internal metadata, keyed by the remote field name with the
    /// sentinel prefix stripped (`@actualEndTime` -> `actualEndTime`).
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl PipelineDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            tags: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the describe call has populated this descriptor.
    pub fn is_enriched(&self) -> bool {
        self.tags.is_some()
    }

    /// Look up a provider-internal field by its stripped key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}
