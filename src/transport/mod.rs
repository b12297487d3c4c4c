//! Network transport for the control-plane client.

pub mod http;

pub use http::{HttpClientConfig, HttpPipelineClient};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
