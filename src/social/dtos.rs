use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::Comment;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FollowRequest {
    pub follower_address: String,
    pub following_address: String,
}

impl FollowRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.follower_address.trim().is_empty() || self.following_address.trim().is_empty() {
            return Err("Both wallet addresses are required".to_string());
        }
        if self.follower_address == self.following_address {
            return Err("Cannot follow yourself".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub user_address: String,
    pub snippet_id: String,
}

impl LikeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_address.trim().is_empty() || self.snippet_id.trim().is_empty() {
            return Err("User address and snippet id are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeResponse {
    pub liked: bool,
}

/// Comment content is stored as given, empty included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub user_address: String,
    pub snippet_id: String,
    #[serde(default)]
    pub content: String,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_address.trim().is_empty() || self.snippet_id.trim().is_empty() {
            return Err("User address and snippet id are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}
