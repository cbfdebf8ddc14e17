//! User records and credentials

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::error::{ClientError, ClientResult};

pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body for both signup and signin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Sign-up form hint. The service decides what is actually acceptable.
    pub fn validate_signup(&self) -> ClientResult<()> {
        if self.email.trim().is_empty() {
            return Err(ClientError::Validation("Email is required".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ClientError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        Ok(())
    }
}

/// Response of `POST /api/auth/signin`
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_minimum() {
        assert!(Credentials::new("a@b.c", "1234567").validate_signup().is_err());
        assert!(Credentials::new("a@b.c", "12345678").validate_signup().is_ok());
        assert!(Credentials::new(" ", "12345678").validate_signup().is_err());
    }

    #[test]
    fn test_signin_response() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "bearer",
            "user": {"id": "u-1", "email": "a@b.c", "created_at": "2024-01-01T00:00:00"}
        }"#;
        let resp: SignInResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "tok");
        assert_eq!(resp.user.email, "a@b.c");
    }
}
