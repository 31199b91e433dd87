//! Request/response types for the signup endpoint.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::store::Account;

/// Incoming signup payload. The raw password is wrapped in a `SecretString`
/// so debug output and traces never leak it.
#[derive(ToSchema, Deserialize, Debug)]
pub struct RegistrationRequest {
    pub email: String,
    #[schema(value_type = String)]
    pub password: SecretString,
    pub name: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub user: Account,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[test]
    fn registration_request_deserializes() -> Result<()> {
        let value = json!({
            "email": "test@example.com",
            "password": "password123",
            "name": "Test User",
        });
        let request: RegistrationRequest = serde_json::from_value(value)?;
        assert_eq!(request.email, "test@example.com");
        assert_eq!(request.password.expose_secret(), "password123");
        assert_eq!(request.name, "Test User");
        Ok(())
    }

    #[test]
    fn registration_request_debug_redacts_password() -> Result<()> {
        let value = json!({
            "email": "test@example.com",
            "password": "password123",
            "name": "Test User",
        });
        let request: RegistrationRequest = serde_json::from_value(value)?;
        let debug = format!("{request:?}");
        assert!(!debug.contains("password123"));
        assert!(debug.contains("REDACTED"));
        Ok(())
    }

    #[test]
    fn signup_response_wraps_account() -> Result<()> {
        let response = SignupResponse {
            user: Account {
                id: "7e2f9c2a-54d1-4b0e-9f0f-0a4b1c2d3e4f".to_string(),
                email: "test@example.com".to_string(),
                password: "hashedPassword".to_string(),
                name: "Test User".to_string(),
            },
        };
        let value = serde_json::to_value(&response)?;
        assert_eq!(
            value.pointer("/user/email").and_then(serde_json::Value::as_str),
            Some("test@example.com")
        );
        assert_eq!(
            value
                .pointer("/user/password")
                .and_then(serde_json::Value::as_str),
            Some("hashedPassword")
        );
        Ok(())
    }

    #[test]
    fn error_response_shape() -> Result<()> {
        let response = ErrorResponse {
            error: "User already exists".to_string(),
        };
        let value = serde_json::to_value(&response)?;
        assert_eq!(value, json!({"error": "User already exists"}));
        Ok(())
    }
}
