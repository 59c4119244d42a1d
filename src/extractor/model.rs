use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedSnippet {
    pub url: String,
    pub title: String,
    pub snippet: String,
}
