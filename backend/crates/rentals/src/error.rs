//! Rentals Error Types
//!
//! Place and booking errors that integrate with the unified
//! `kernel::error::AppError` system. "Not authenticated", "not authorized",
//! and "not found" are distinct variants with distinct status codes, since
//! each implies a different caller action.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Rentals-specific result type alias
pub type RentalsResult<T> = Result<T, RentalsError>;

/// Rentals-specific error variants
#[derive(Debug, Error)]
pub enum RentalsError {
    /// No verified identity on a request that requires one
    #[error("Authentication required")]
    Unauthenticated,

    /// Valid identity, but not the owner of the place being mutated
    #[error("Only the owner may modify this place")]
    NotOwner,

    /// Referenced place absent
    #[error("Place not found")]
    PlaceNotFound,

    /// Check-in/check-out dates do not describe a stay
    #[error("Invalid stay: {0}")]
    InvalidStay(String),

    /// Client-supplied total disagrees with the server-side recomputation
    #[error("Booking total does not match {expected} for this stay")]
    PriceMismatch { expected: i64 },

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

impl RentalsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RentalsError::Unauthenticated => StatusCode::UNAUTHORIZED,
            RentalsError::NotOwner => StatusCode::FORBIDDEN,
            RentalsError::PlaceNotFound => StatusCode::NOT_FOUND,
            RentalsError::InvalidStay(_) | RentalsError::PriceMismatch { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RentalsError::Validation(_) => StatusCode::BAD_REQUEST,
            RentalsError::Database(_) | RentalsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RentalsError::Unauthenticated => ErrorKind::Unauthorized,
            RentalsError::NotOwner => ErrorKind::Forbidden,
            RentalsError::PlaceNotFound => ErrorKind::NotFound,
            RentalsError::InvalidStay(_) | RentalsError::PriceMismatch { .. } => {
                ErrorKind::UnprocessableEntity
            }
            RentalsError::Validation(_) => ErrorKind::BadRequest,
            RentalsError::Database(_) | RentalsError::Internal(_) => {
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
            RentalsError::Database(e) => {
                tracing::error!(error = %e, "Rentals database error");
            }
            RentalsError::Internal(msg) => {
                tracing::error!(message = %msg, "Rentals internal error");
            }
            RentalsError::NotOwner => {
                tracing::warn!("Rejected mutation by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Rentals error");
            }
        }
    }
}

impl IntoResponse for RentalsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for RentalsError {
    fn from(err: AppError) -> Self {
        RentalsError::Internal(err.to_string())
    }
}
