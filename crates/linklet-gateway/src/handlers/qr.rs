use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::handlers::url::parse_short_id;
use crate::state::AppState;

/// Renders a QR code for the short URL of an existing mapping.
pub async fn qr_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = parse_short_id(short_id)?;
    state.shortener().resolve(&code).await?;

    let short_url = code.to_url(state.base_url());
    let renderer = state.renderer();
    let content_type = renderer.content_type();

    debug!(code = %code, short_url = %short_url, "rendering QR code");
    let image = tokio::task::spawn_blocking(move || renderer.render(&short_url))
        .await
        .map_err(|e| AppError::Internal(format!("QR render task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, content_type)], image).into_response())
}
