mod health;
mod url;

pub use health::HealthResponse;
pub use url::{ShortenRequest, ShortenResponse, UrlEntry};

use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
