// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// The single application error type. Handlers return Result<_, AppError>
// and `?` does the conversions via the #[from] variants below.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail already in use")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Tenant access denied")]
    TenantAccessDenied,

    #[error("Missing x-tenant-id header")]
    MissingTenantHeader,

    #[error("Invalid x-tenant-id header")]
    InvalidTenantHeader,

    #[error("Unknown permission key: {0}")]
    UnknownPermission(String),

    #[error("Override conflict: {0}")]
    OverrideConflict(String),

    #[error("Invalid stay dates: {0}")]
    InvalidStayDates(String),

    #[error("Room is not available for the requested dates")]
    RoomUnavailable,

    #[error("Unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::UnknownPermission(_)
            | AppError::OverrideConflict(_)
            | AppError::InvalidStayDates(_)
            | AppError::MissingTenantHeader
            | AppError::InvalidTenantHeader => StatusCode::BAD_REQUEST,

            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,

            AppError::MissingPermission(_) | AppError::TenantAccessDenied => StatusCode::FORBIDDEN,

            AppError::UserNotFound | AppError::NotFound(_) => StatusCode::NOT_FOUND,

            AppError::EmailAlreadyExists
            | AppError::RoomUnavailable
            | AppError::UniqueConstraintViolation(_) => StatusCode::CONFLICT,

            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Validation errors carry the per-field messages as details.
        if let AppError::ValidationError(errors) = &self {
            let mut details = std::collections::HashMap::new();
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                details.insert(field.to_string(), messages);
            }
            let body = Json(json!({
                "error": "One or more fields are invalid.",
                "details": details,
            }));
            return (status, body).into_response();
        }

        let message = match &self {
            AppError::EmailAlreadyExists => "This e-mail is already in use.".to_string(),
            AppError::InvalidCredentials => "Invalid e-mail or password.".to_string(),
            AppError::InvalidToken => "Missing or invalid authentication token.".to_string(),
            AppError::UserNotFound => "User not found.".to_string(),
            AppError::NotFound(what) => format!("{} not found.", what),
            AppError::MissingPermission(slug) => {
                format!("You need the '{}' permission to perform this action.", slug)
            }
            AppError::TenantAccessDenied => {
                "You do not have access to the selected property.".to_string()
            }
            AppError::MissingTenantHeader => "The x-tenant-id header is required.".to_string(),
            AppError::InvalidTenantHeader => {
                "The x-tenant-id header is not a valid UUID.".to_string()
            }
            AppError::UnknownPermission(key) => format!("Unknown permission key '{}'.", key),
            AppError::OverrideConflict(msg) => msg.clone(),
            AppError::InvalidStayDates(msg) => msg.clone(),
            AppError::RoomUnavailable => {
                "The room is already booked for the requested dates.".to_string()
            }
            AppError::UniqueConstraintViolation(msg) => msg.clone(),

            // Everything infrastructural becomes an opaque 500; the detailed
            // message goes to the log, not to the client.
            e => {
                tracing::error!("Internal server error: {}", e);
                "An unexpected error occurred.".to_string()
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_permission_maps_to_forbidden() {
        let err = AppError::MissingPermission("settings.access.manage".into());
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn override_conflict_is_a_bad_request() {
        let err = AppError::OverrideConflict("key in both lists".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        assert_eq!(
            AppError::EmailAlreadyExists.status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        assert_eq!(
            AppError::NotFound("Customer").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
