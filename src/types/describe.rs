//! Wire shapes returned by the control plane's batch-describe endpoint.

use serde::{Deserialize, Serialize};

/// Tag pair as the provider sends it (lowercase keys on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTag {
    pub key: String,
    pub value: String,
}

/// Provider metadata field. Keys carrying the `@` sentinel prefix are
/// internal fields that get copied onto the descriptor, prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteField {
    pub key: String,
    #[serde(default)]
    pub string_value: String,
}

/// Description of one pipeline from the batch-describe call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDescription {
    pub pipeline_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<RemoteTag>,
    #[serde(default)]
    pub fields: Vec<RemoteField>,
}

/// Response payload of the batch-describe endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeOutput {
    #[serde(default)]
    pub pipeline_description_list: Vec<PipelineDescription>,
}

impl DescribeOutput {
    /// Result used when excision empties the working set: resolution
    /// completes without another remote call.
    pub fn empty() -> Self {
        Self::default()
    }
}
