use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::{
    entities::SnippetMetadata,
    gateway::{
        client::{GatewayTag, StorageGateway, UploadRequest},
        mock::MockGateway,
    },
};

pub const APPLICATION_ID: &str = "SnippetVault";

/// Tags stamped on every upload ahead of the caller's own.
pub fn application_tags(timestamp_millis: i64) -> Vec<GatewayTag> {
    vec![
        GatewayTag::new("application-id", APPLICATION_ID),
        GatewayTag::new("timestamp", timestamp_millis.to_string()),
        GatewayTag::new("Content-Type", "application/json"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub id: String,
    pub gateway_url: String,
    pub timestamp: i64,
    pub mocked: bool,
}

impl StoredUpload {
    pub fn message(&self) -> &'static str {
        if self.mocked {
            "Storage network unavailable, stored with a mock id"
        } else {
            "Uploaded to the storage network"
        }
    }
}

/// Upload through `gateway`, substituting a payload-derived mock receipt if
/// it fails. Never errors.
#[instrument(skip_all, fields(owner = %owner))]
pub async fn upload_with_fallback(
    gateway: &dyn StorageGateway,
    data: String,
    signature: String,
    owner: String,
    tags: Vec<GatewayTag>,
) -> StoredUpload {
    let mut all_tags = application_tags(Utc::now().timestamp_millis());
    all_tags.extend(tags);

    let request = UploadRequest {
        data,
        tags: all_tags,
        owner,
        signature,
    };
    let fallback = MockGateway::receipt_for(&request.data);

    let (receipt, mocked) = match gateway.upload(request).await {
        Ok(receipt) => {
            info!(id = %receipt.id, "payload uploaded");
            (receipt, false)
        }
        Err(e) => {
            warn!(error = %e, id = %fallback.id, "upload failed, using mock id");
            (fallback, true)
        }
    };

    StoredUpload {
        gateway_url: gateway.gateway_url(&receipt.id),
        id: receipt.id,
        timestamp: receipt.timestamp,
        mocked,
    }
}

/// Fetch each snippet's stored payload and merge in what the index knows.
/// Records the gateway cannot return are skipped.
#[instrument(skip_all, fields(count = snippets.len()))]
pub async fn resolve_records(
    gateway: &dyn StorageGateway,
    snippets: &[SnippetMetadata],
) -> Vec<Value> {
    let mut records = Vec::with_capacity(snippets.len());
    for snippet in snippets {
        match gateway.fetch(&snippet.storage_id).await {
            Ok(fetched) => records.push(merge_record(snippet, fetched)),
            Err(e) => warn!(storage_id = %snippet.storage_id, error = %e, "skipping record"),
        }
    }
    records
}

fn merge_record(snippet: &SnippetMetadata, fetched: Value) -> Value {
    let mut record = match fetched {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };

    record.insert("id".to_string(), Value::from(snippet.storage_id.clone()));
    record.insert(
        "storage_id".to_string(),
        Value::from(snippet.storage_id.clone()),
    );
    record.insert(
        "wallet_address".to_string(),
        Value::from(snippet.wallet_address.clone()),
    );
    record
        .entry("network")
        .or_insert_with(|| Value::from(snippet.network.clone()));
    record
        .entry("timestamp")
        .or_insert_with(|| Value::from(snippet.timestamp.to_rfc3339()));

    Value::Object(record)
}
