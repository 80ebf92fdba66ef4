use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::handlers::{
    fallback_handler, health_handler, list_urls_handler, qr_handler, redirect_handler,
    shorten_handler, shorten_path_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler).get(shorten_path_handler))
            .route("/urls", get(list_urls_handler))
            .route("/qr/{short_id}", get(qr_handler))
            .route("/{short_id}", get(redirect_handler))
            .fallback(fallback_handler)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}

/// Turns a panic inside a handler or service into a JSON 500 so the
/// connection still gets an answer.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::from_panic(payload).into_response()
}
