//! Error types for Gateman server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::InputError;

/// Numeric error codes returned to kiosk clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    InvalidId = 1,
    InvalidMobile = 2,
    MissingName = 3,
    InvalidPlate = 4,
    AlreadyInside = 5,
    NotInside = 6,
    StoreUnavailable = 7,
}

impl From<InputError> for ErrorCode {
    fn from(e: InputError) -> Self {
        match e {
            InputError::InvalidId | InputError::InvalidCheckOutId => ErrorCode::InvalidId,
            InputError::InvalidMobile => ErrorCode::InvalidMobile,
            InputError::MissingName => ErrorCode::MissingName,
            InputError::InvalidPlate => ErrorCode::InvalidPlate,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("This person is already checked in!")]
    AlreadyInside { id_number: String },

    #[error("No active check-in found for this ID")]
    NotInside { id_number: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

const TRY_AGAIN: &str = "The visitor register is unavailable. Please try again.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Input(e) => (StatusCode::BAD_REQUEST, ErrorCode::from(*e), e.to_string()),
            AppError::AlreadyInside { .. } => {
                (StatusCode::CONFLICT, ErrorCode::AlreadyInside, self.to_string())
            }
            AppError::NotInside { .. } => {
                (StatusCode::NOT_FOUND, ErrorCode::NotInside, self.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::StoreUnavailable,
                    TRY_AGAIN.to_string(),
                )
            }
            AppError::StoreUnavailable(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::StoreUnavailable,
                    TRY_AGAIN.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
