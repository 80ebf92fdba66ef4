use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
///
/// `url` is optional at the schema level so a missing field surfaces as
/// "URL is required" rather than a generic body error.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
}

/// One item of `GET /urls`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntry {
    pub short_id: String,
    pub long_url: String,
    pub short_url: String,
}
