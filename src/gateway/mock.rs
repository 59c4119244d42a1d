use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::gateway::{
    client::{StorageGateway, UploadReceipt, UploadRequest},
    errors::GatewayError,
};

pub const MOCK_ID_PREFIX: &str = "mock_";

/// Offline stand-in for the storage network. Ids are derived from the
/// payload, so the same data always maps to the same id.
#[derive(Debug, Clone)]
pub struct MockGateway {
    gateway_url: String,
}

impl MockGateway {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn receipt_for(data: &str) -> UploadReceipt {
        UploadReceipt {
            id: mock_id(data),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

pub fn mock_id(data: &str) -> String {
    format!("{}{:x}", MOCK_ID_PREFIX, md5::compute(data.as_bytes()))
}

#[async_trait]
impl StorageGateway for MockGateway {
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, GatewayError> {
        Ok(Self::receipt_for(&request.data))
    }

    async fn fetch(&self, id: &str) -> Result<Value, GatewayError> {
        Err(GatewayError::NotFound(id.to_string()))
    }

    fn gateway_url(&self, id: &str) -> String {
        format!("{}/{}", self.gateway_url, id)
    }
}
