//! Accounts Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// No account exists for the given email
    #[error("User not found")]
    EmailNotFound,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Password does not match the stored credential
    #[error("Password not correct")]
    IncorrectPassword,

    /// Referenced user record absent
    #[error("User not found")]
    UserNotFound,

    /// Request input missing or malformed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountsError::EmailNotFound | AccountsError::UserNotFound => StatusCode::NOT_FOUND,
            AccountsError::EmailTaken => StatusCode::CONFLICT,
            // Wrong password is 422, not 401, to match the public wire
            // contract; unknown email stays distinguishable as 404.
            AccountsError::IncorrectPassword => StatusCode::UNPROCESSABLE_ENTITY,
            AccountsError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::EmailNotFound | AccountsError::UserNotFound => ErrorKind::NotFound,
            AccountsError::EmailTaken => ErrorKind::Conflict,
            AccountsError::IncorrectPassword => ErrorKind::UnprocessableEntity,
            AccountsError::Validation(_) => ErrorKind::BadRequest,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures keep their detail in the logs; the client only
    /// sees the error class.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            return AppError::new(self.kind(), "Something went wrong on our side")
                .with_action("Please try again later");
        }
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::IncorrectPassword => {
                tracing::warn!("Login attempt with wrong password");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}
