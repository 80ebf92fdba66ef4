use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_core::ShortCode;
use tracing::info;

use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse, UrlEntry};
use crate::state::AppState;

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload?;
    let url = request.url.ok_or(AppError::UrlRequired)?;

    let mapping = state.shortener().shorten(&url).await?;
    info!(code = %mapping.short_code, url = %mapping.record.original_url, "shortened url");

    Ok(Json(ShortenResponse {
        short_url: mapping.short_code.to_url(state.base_url()),
        short_id: mapping.short_code.to_string(),
        original_url: mapping.record.original_url,
    }))
}

pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    redirect(&state, short_id).await
}

/// `GET /shorten` is not a route of its own; the path is looked up as a
/// short id like any other single segment.
pub async fn shorten_path_handler(State(state): State<AppState>) -> Result<Response> {
    redirect(&state, "shorten".to_owned()).await
}

async fn redirect(state: &AppState, short_id: String) -> Result<Response> {
    let code = parse_short_id(short_id)?;
    let record = state.shortener().resolve(&code).await?;
    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

pub async fn list_urls_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlEntry>>> {
    let entries = state
        .shortener()
        .list()
        .await?
        .into_iter()
        .map(|mapping| UrlEntry {
            short_url: mapping.short_code.to_url(state.base_url()),
            short_id: mapping.short_code.to_string(),
            long_url: mapping.record.original_url,
        })
        .collect();

    Ok(Json(entries))
}

pub async fn fallback_handler() -> AppError {
    AppError::RouteNotFound
}

/// Path segments that can never name a mapping are simply unknown.
pub(crate) fn parse_short_id(short_id: String) -> Result<ShortCode> {
    ShortCode::new(short_id).map_err(|_| AppError::ShortUrlNotFound)
}

/// Uses the stored target as-is when it is a legal header value, otherwise
/// its ASCII serialization.
fn location_header(target: &str) -> Result<HeaderValue> {
    if target.trim() == target {
        if let Ok(value) = HeaderValue::from_str(target) {
            return Ok(value);
        }
    }

    ::url::Url::parse(target)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| AppError::Internal(format!("target is not a valid Location: {target:?}")))
}
