use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned {0}")]
    Status(reqwest::StatusCode),

    #[error("record {0} not found")]
    NotFound(String),

    #[error("malformed gateway response: {0}")]
    Malformed(String),
}
