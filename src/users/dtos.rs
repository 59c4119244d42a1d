use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{entities::UserProfile, repositories::ProfileFields};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub wallet_address: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.wallet_address.trim().is_empty() {
            return Err("Wallet address is required".to_string());
        }
        Ok(())
    }

    pub fn into_parts(self) -> (String, ProfileFields) {
        (
            self.wallet_address,
            ProfileFields {
                username: self.username,
                bio: self.bio,
            },
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
}
