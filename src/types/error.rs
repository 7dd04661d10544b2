use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::types::webhook::WebhookOp;

#[derive(Debug, Error)]
pub enum AppError {
    // auth
    #[error("invalid email or password")]
    InvalidCredentials,

    // standard web stuffs
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),

    // webhook things
    #[error("webhook url not configured")]
    NotConfigured,
    #[error("upstream {0} call failed")]
    Upstream(WebhookOp),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} has invalid value {1:?}")]
    Invalid(&'static str, String),
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::Upstream(_) => "UPSTREAM_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// What the caller gets to read. Internal detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::Validation(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::NotConfigured => "Webhook URL not configured".to_string(),
            Self::Upstream(op) => op.failure_message().to_string(),
            Self::Internal(_) => self.kind().to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.public_message();
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &message,
        })
    }
}
