//! Thin async client for the orchestrator's REST surface.

use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::ClientError;
use crate::workflow::WorkflowDocument;

/// Connection settings for the orchestrator, passed in explicitly. There is
/// no ambient configuration; every client owns its own copy.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the orchestrator API (e.g. "https://argo.example.com").
    pub base_url: String,
    /// Bearer token; a pre-existing "Bearer " prefix is tolerated.
    pub token: String,
    /// Namespace workflows are submitted to and polled from.
    pub namespace: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            namespace: "argo".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Engine response to a workflow submission. The engine derives the actual
/// resource name from `generateName`, so the name echoed here is the one to
/// poll, not the client-chosen one.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub metadata: SubmitMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

impl SubmitResponse {
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }
}

/// Engine status document; only the phase string matters here.
#[derive(Debug, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: PhaseBlock,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhaseBlock {
    #[serde(default)]
    pub phase: Option<String>,
}

impl StatusResponse {
    pub fn phase(&self) -> &str {
        self.status.phase.as_deref().unwrap_or("Unknown")
    }
}

/// A client for one orchestrator endpoint.
#[derive(Debug, Clone)]
pub struct ArgoClient {
    base_url: String,
    token: String,
    namespace: String,
    http: HttpClient,
}

impl ArgoClient {
    /// Creates a client from explicit configuration, normalizing the base
    /// URL and token.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                config.base_url
            )));
        }

        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: normalize_token(&config.token),
            namespace: config.namespace,
            http,
        })
    }

    /// Lightweight reachability check, used before submission so a dead
    /// server fails fast instead of after document generation.
    pub async fn probe(&self) -> Result<(), ClientError> {
        let url = format!("{}/api/v1/info", self.base_url);
        let response = self.with_auth(self.http.get(&url)).send().await?;
        self.check(response).await?;
        Ok(())
    }

    /// Submits a compiled document for execution.
    pub async fn submit(&self, workflow: &WorkflowDocument) -> Result<SubmitResponse, ClientError> {
        let url = format!("{}/api/v1/workflows/{}", self.base_url, self.namespace);
        let response = self
            .with_auth(self.http.post(&url))
            .json(&json!({ "workflow": workflow }))
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json::<SubmitResponse>().await?)
    }

    /// Fetches the current status of a workflow by its engine-assigned name.
    pub async fn workflow_status(&self, name: &str) -> Result<StatusResponse, ClientError> {
        let url = format!(
            "{}/api/v1/workflows/{}/{}",
            self.base_url,
            self.namespace,
            urlencoding::encode(name)
        );
        let response = self.with_auth(self.http.get(&url)).send().await?;
        let response = self.check(response).await?;
        Ok(response.json::<StatusResponse>().await?)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.token.is_empty() {
            builder
        } else {
            builder.header("Authorization", format!("Bearer {}", self.token))
        }
    }

    /// Maps non-2xx responses to `ClientError::Api`, extracting a `message`
    /// or `error` field from JSON bodies when present.
    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Trims the raw token and strips any existing "Bearer " prefix,
/// case-insensitively, so it can be re-added uniformly.
fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer") => {
            trimmed[6..].trim_start().to_string()
        }
        _ => trimmed.to_string(),
    }
}
