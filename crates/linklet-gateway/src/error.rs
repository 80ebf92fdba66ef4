use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_core::ShortenerError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;
use crate::qr::RenderError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors returned by handlers.
///
/// The `Display` text is what clients see in the `error` field; any detail
/// carried by a variant is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL is required")]
    UrlRequired,
    #[error("Invalid URL format")]
    InvalidUrl(String),
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("Short URL not found")]
    ShortUrlNotFound,
    #[error("Not found")]
    RouteNotFound,
    #[error("Failed to generate QR code")]
    Encoding(#[from] RenderError),
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UrlRequired | AppError::InvalidUrl(_) | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ShortUrlNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Encoding(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Wraps the payload of a panic caught while serving a request.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let detail = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with a non-string payload".to_owned()
        };
        AppError::Internal(detail)
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::EmptyInput => AppError::UrlRequired,
            ShortenerError::InvalidUrl(detail) => AppError::InvalidUrl(detail),
            ShortenerError::NotFound(_) => AppError::ShortUrlNotFound,
            other @ (ShortenerError::ExhaustedRetries { .. } | ShortenerError::Storage(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // A body sent without a JSON content type carries no `url`.
            JsonRejection::MissingJsonContentType(_) => AppError::UrlRequired,
            other => AppError::InvalidBody(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Encoding(source) => error!(error = %source, "QR rendering failed"),
            AppError::Internal(detail) => error!(error = %detail, "request failed"),
            AppError::InvalidUrl(detail) | AppError::InvalidBody(detail) => {
                debug!(detail = %detail, "rejected request")
            }
            _ => {}
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
