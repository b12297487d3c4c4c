//! HTTP implementation of [`PipelineApi`].
//!
//! The control plane speaks target-header-routed JSON: every operation is a
//! POST to the service endpoint with an `x-service-target` header naming the
//! action. Failures come back as non-2xx responses whose JSON body carries a
//! `__type` error code (optionally namespaced, `com.example.service#Code`)
//! and a human-readable `message`; both are preserved on [`Error::Remote`]
//! so the resilience and enrichment layers can classify by code.

use crate::client::PipelineApi;
use crate::transport::TransportError;
use crate::types::DescribeOutput;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Connection settings for [`HttpPipelineClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub endpoint: String,
    /// Service prefix of the target header, e.g. `PipelineService`.
    pub service: String,
    pub timeout: Duration,
    /// Static bearer token; session/credential management stays with the
    /// caller.
    pub api_token: Option<String>,
}

impl HttpClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service: "PipelineService".to_string(),
            timeout: Duration::from_secs(30),
            api_token: None,
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

/// Shape of the provider's JSON error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Strip the `namespace#` prefix from a `__type` value.
fn error_code_from_type(error_type: &str) -> &str {
    match error_type.rsplit_once('#') {
        Some((_, code)) => code,
        None => error_type,
    }
}

/// Decode a non-2xx response body into `Error::Remote`, falling back to a
/// status-derived code when the body is not the expected JSON shape.
fn decode_error_body(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let code = parsed
                .error_type
                .as_deref()
                .map(error_code_from_type)
                .unwrap_or("UnknownError")
                .to_string();
            let message = parsed.message.unwrap_or_else(|| body.to_string());
            Error::Remote { code, message }
        }
        Err(_) => Error::remote(format!("HttpStatus{}", status), body.to_string()),
    }
}

/// reqwest-backed control-plane client.
#[derive(Debug)]
pub struct HttpPipelineClient {
    http: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpPipelineClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Url::parse(&config.endpoint).map_err(|e| {
            Error::invalid_argument(format!("invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { http, config })
    }

    async fn call(&self, target: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        let mut request = self
            .http
            .post(&self.config.endpoint)
            .header(
                "x-service-target",
                format!("{}.{}", self.config.service, target),
            )
            .json(&body);

        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| Error::Transport(TransportError::Http(e)))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| Error::Transport(TransportError::Http(e)))?;
            Err(decode_error_body(status.as_u16(), &text))
        }
    }
}

#[async_trait]
impl PipelineApi for HttpPipelineClient {
    async fn describe_pipelines(&self, ids: &[String]) -> Result<DescribeOutput> {
        let value = self
            .call(
                "DescribePipelines",
                serde_json::json!({ "pipelineIds": ids }),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn delete_pipeline(&self, id: &str) -> Result<()> {
        self.call("DeletePipeline", serde_json::json!({ "pipelineId": id }))
            .await?;
        Ok(())
    }
}
