use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::gateway::client::GatewayTag;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadPayload {
    pub data: String,
    #[serde(default)]
    pub signature: String,
    pub address: String,
    #[serde(default)]
    pub tags: Vec<GatewayTag>,
}

impl UploadPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("Address is required".to_string());
        }
        if self.data.is_empty() {
            return Err("Data is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub id: String,
    pub gateway_url: String,
    pub timestamp: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoredRecordsResponse {
    #[schema(value_type = Vec<Object>)]
    pub snippets: Vec<Value>,
}
