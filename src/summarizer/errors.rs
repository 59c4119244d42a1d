use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Summarizer API key not configured")]
    MissingApiKey,

    #[error("summarizer request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("summarizer returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid image data: {0}")]
    InvalidImage(String),
}

impl SummarizeError {
    /// Caller mistakes, as opposed to configuration or upstream failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidImage(_))
    }
}
