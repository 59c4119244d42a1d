//! Content-addressed storage: the gateway clients, the offline mock, and the
//! upload/query operations built on them.

pub mod client;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod mock;
pub mod service;

pub use client::{GatewayTag, HttpGateway, StorageGateway, UploadReceipt, UploadRequest};
pub use errors::GatewayError;
pub use mock::MockGateway;
