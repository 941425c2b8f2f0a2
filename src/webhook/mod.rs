//! Webhook backend client
//!
//! The automation backend exposes one webhook per operation under a common
//! base URL (`{base}/workspaces`, `{base}/instancia`, ...). Listing responses
//! must be JSON arrays; create and delete responses only need a 2xx status.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::WebhookConfig;
use crate::model::{
    parse_array, validate_name, CreateInstanceRequest, CreateWorkspaceRequest, InstanceRecord,
    NameError, PayloadError, WorkspaceRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),
    #[error("webhook returned {0}")]
    Status(StatusCode),
    #[error("malformed webhook payload: {0}")]
    Payload(#[from] PayloadError),
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid webhook base url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, WebhookError>;

/// HTTP client for the webhook automation backend.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        self.client.request(method, url)
    }

    /// Send and require a 2xx status.
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }
        Ok(response)
    }

    async fn fetch_array<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>> {
        let response = self.send(request).await?;
        // A body that isn't JSON at all is as malformed as one that isn't an array
        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes).map_err(PayloadError::from)?;
        Ok(parse_array(value)?)
    }

    /// GET `{base}/workspaces`
    pub async fn list_workspaces(&self) -> Result<Vec<WorkspaceRecord>> {
        let records: Vec<WorkspaceRecord> = self
            .fetch_array(self.request(Method::GET, "workspaces"))
            .await?;
        debug!(count = records.len(), "Listed workspaces");
        Ok(records)
    }

    /// POST `{base}/workspace` with `{nome_workspace}`
    pub async fn create_workspace(&self, name: &str) -> Result<()> {
        let body = CreateWorkspaceRequest {
            nome_workspace: validate_name(name)?,
        };
        self.send(self.request(Method::POST, "workspace").json(&body))
            .await?;
        debug!(name = %body.nome_workspace, "Created workspace");
        Ok(())
    }

    /// DELETE `{base}/workspace?id=<id>`
    pub async fn delete_workspace(&self, id: &str) -> Result<()> {
        self.send(
            self.request(Method::DELETE, "workspace")
                .query(&[("id", id)]),
        )
        .await?;
        debug!(id, "Deleted workspace");
        Ok(())
    }

    /// GET `{base}/instancias?workspaceId=<id>`
    pub async fn list_instances(&self, workspace_id: &str) -> Result<Vec<InstanceRecord>> {
        let records: Vec<InstanceRecord> = self
            .fetch_array(
                self.request(Method::GET, "instancias")
                    .query(&[("workspaceId", workspace_id)]),
            )
            .await?;
        debug!(workspace_id, count = records.len(), "Listed instances");
        Ok(records)
    }

    /// POST `{base}/instancia` with `{nome_instancia, workspace_id}`
    pub async fn create_instance(&self, name: &str, workspace_id: &str) -> Result<()> {
        let body = CreateInstanceRequest {
            nome_instancia: validate_name(name)?,
            workspace_id: workspace_id.to_string(),
        };
        self.send(self.request(Method::POST, "instancia").json(&body))
            .await?;
        debug!(name = %body.nome_instancia, workspace_id, "Created instance");
        Ok(())
    }

    /// DELETE `{base}/instancia?id=<id>`
    pub async fn delete_instance(&self, id: &str) -> Result<()> {
        self.send(
            self.request(Method::DELETE, "instancia")
                .query(&[("id", id)]),
        )
        .await?;
        debug!(id, "Deleted instance");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> WebhookConfig {
        WebhookConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = WebhookClient::new(&config("http://localhost:5678/webhook/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5678/webhook");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = WebhookClient::new(&config("::nope")).unwrap_err();
        assert!(matches!(err, WebhookError::Url(_)));
    }

    #[tokio::test]
    async fn test_blank_name_rejected_without_network() {
        // Port 9 (discard) is never contacted: validation fails first
        let client = WebhookClient::new(&config("http://127.0.0.1:9/webhook")).unwrap();
        let err = client.create_workspace("   ").await.unwrap_err();
        assert!(matches!(err, WebhookError::InvalidName(NameError::Empty)));
        let err = client.create_instance("", "7").await.unwrap_err();
        assert!(matches!(err, WebhookError::InvalidName(NameError::Empty)));
    }
}
