use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use crate::gateway::errors::GatewayError;

/// A name/value tag attached to an uploaded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GatewayTag {
    pub name: String,
    pub value: String,
}

impl GatewayTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    pub data: String,
    pub tags: Vec<GatewayTag>,
    pub owner: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub id: String,
    /// Unix millis.
    pub timestamp: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageGateway: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, GatewayError>;
    /// Retrieve a stored payload as JSON.
    async fn fetch(&self, id: &str) -> Result<Value, GatewayError>;
    fn gateway_url(&self, id: &str) -> String;
}

/// Client for a content-addressed upload node plus its read gateway.
#[derive(Clone)]
pub struct HttpGateway {
    http: Client,
    node_url: String,
    gateway_url: String,
}

impl HttpGateway {
    pub fn new(node_url: impl Into<String>, gateway_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            node_url: node_url.into().trim_end_matches('/').to_string(),
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NodeReceipt {
    id: String,
    #[serde(default)]
    timestamp: Option<i64>,
}

#[async_trait]
impl StorageGateway for HttpGateway {
    #[instrument(skip_all, fields(node = %self.node_url, owner = %request.owner))]
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, GatewayError> {
        let response = self
            .http
            .post(format!("{}/upload", self.node_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let receipt: NodeReceipt = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        if receipt.id.trim().is_empty() {
            return Err(GatewayError::Malformed("empty id".to_string()));
        }

        Ok(UploadReceipt {
            id: receipt.id,
            timestamp: receipt
                .timestamp
                .unwrap_or_else(|| Utc::now().timestamp_millis()),
        })
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: &str) -> Result<Value, GatewayError> {
        let response = self.http.get(self.gateway_url(id)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound(id.to_string())),
            status if !status.is_success() => Err(GatewayError::Status(status)),
            _ => response
                .json()
                .await
                .map_err(|e| GatewayError::Malformed(e.to_string())),
        }
    }

    fn gateway_url(&self, id: &str) -> String {
        format!("{}/{}", self.gateway_url, id)
    }
}
