use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusCheckRequest {
    pub client_name: String,
}

impl StatusCheckRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Client name is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_client_name_rejected() {
        let blank = StatusCheckRequest {
            client_name: " ".into(),
        };
        assert_eq!(blank.validate().unwrap_err(), "Client name is required");

        let ok = StatusCheckRequest {
            client_name: "mobile".into(),
        };
        assert!(ok.validate().is_ok());
    }
}
