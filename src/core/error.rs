//! Error types: the HTTP-facing `AppError` and the domain-level
//! `InvitationError` raised at the manager boundary.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<serde_json::Value>,
}

pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    fields: Option<serde_json::Value>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            fields: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach per-field validation messages, rendered as a JSON object keyed
    /// by field name.
    pub fn with_field_errors(mut self, errors: &validator::ValidationErrors) -> Self {
        self.fields = serde_json::to_value(errors).ok();
        self
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: &'static str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(_) => Self::bad_request("Database error"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_field_errors(&err)
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        Self::internal_server_error("Internal server error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}

/// Business-rule failures raised by the invitation manager, translated to
/// HTTP status codes at the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("{0} not found")]
    EntityNotFound(&'static str),

    #[error("invitable is not open for invitations")]
    UnavailableInvitable,

    #[error("invalid recipient: {0}")]
    InvalidRecipient(&'static str),

    #[error("validation failed")]
    InvalidForm(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidParameter(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<InvitationError> for AppError {
    fn from(err: InvitationError) -> Self {
        match err {
            InvitationError::EntityNotFound(what) => {
                AppError::not_found("Resource not found").with_details(what)
            }
            InvitationError::UnavailableInvitable => {
                AppError::bad_request("Invitable is not open for invitations")
            }
            InvitationError::InvalidRecipient(reason) => {
                AppError::bad_request("Invalid recipient").with_details(reason)
            }
            InvitationError::InvalidForm(errors) => {
                AppError::bad_request("Validation error").with_field_errors(&errors)
            }
            InvitationError::InvalidParameter(reason) => {
                AppError::bad_request("Invalid parameter").with_details(reason)
            }
            InvitationError::Database(err) => AppError::from(err),
        }
    }
}
