//! Client Errors
//!
//! Every failure a call can produce, plus the classification the screens
//! act on (redirect vs. banner).

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries no readable envelope.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

pub type ClientResult<T> = Result<T, ClientError>;

/// Error codes the task service puts in `error.code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Internal,
    Unknown,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
            ErrorCode::Other(code) => code,
        }
    }

    pub fn parse(code: &str) -> Self {
        match code {
            "VALIDATION_ERROR" => ErrorCode::Validation,
            "UNAUTHORIZED" => ErrorCode::Unauthorized,
            "FORBIDDEN" => ErrorCode::Forbidden,
            "NOT_FOUND" => ErrorCode::NotFound,
            "INTERNAL_ERROR" => ErrorCode::Internal,
            "UNKNOWN_ERROR" => ErrorCode::Unknown,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

/// How a screen should react to a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Session is no longer valid: clear it and go to sign-in
    Auth,
    /// The service rejected the request (validation, not found, ...)
    Rejected,
    /// The exchange itself failed or the body could not be read
    Transport,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
        details: Option<Value>,
    },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Expected a response body but the server sent none")]
    EmptyBody,
}

impl ClientError {
    /// Builds an API error from a failed response's status and raw body.
    ///
    /// A body that is not an error envelope yields the generic message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                let ErrorBody { code, message, details } = envelope.error;
                ClientError::Api {
                    status,
                    code: code.as_deref().map(ErrorCode::parse),
                    message: message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
                    details,
                }
            }
            Err(_) => ClientError::Api {
                status,
                code: None,
                message: FALLBACK_MESSAGE.to_string(),
                details: None,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Api { status, code, message, .. } => {
                let auth = *status == 401
                    || match code {
                        Some(code) => *code == ErrorCode::Unauthorized,
                        // No structured code to go on; fall back to the message
                        None => message.contains("Invalid") || message.contains("expired"),
                    };
                if auth {
                    ErrorKind::Auth
                } else {
                    ErrorKind::Rejected
                }
            }
            ClientError::Validation(_) => ErrorKind::Rejected,
            ClientError::Transport(_) | ClientError::Decode(_) | ClientError::EmptyBody => {
                ErrorKind::Transport
            }
        }
    }

    /// Text for a banner; `fallback` when the error has nothing to say
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}
