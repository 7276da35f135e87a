//! API error responses
//!
//! Every failure is rendered as `{ "error": "<message>" }`. The messages are
//! fixed so that no upstream detail leaks to the visitor; the detail is
//! logged where the error happens.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use portfolio_application::{RelayChatError, RelayContactError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON for the route
    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Invalid chat request")]
    InvalidChatRequest,

    #[error("Failed to connect to backend")]
    ChatUpstream,

    #[error("Missing fields")]
    MissingFields,

    #[error("Failed to send message")]
    MailDelivery,
}

/// JSON error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<RelayChatError> for ApiError {
    fn from(e: RelayChatError) -> Self {
        match e {
            RelayChatError::InvalidRequest(_) => ApiError::InvalidChatRequest,
            RelayChatError::Backend(_) => ApiError::ChatUpstream,
        }
    }
}

impl From<RelayContactError> for ApiError {
    fn from(e: RelayContactError) -> Self {
        match e {
            RelayContactError::Validation(_) => ApiError::MissingFields,
            RelayContactError::Configuration(_) | RelayContactError::Transport(_) => {
                ApiError::MailDelivery
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidChatRequest | ApiError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ChatUpstream | ApiError::MailDelivery => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
