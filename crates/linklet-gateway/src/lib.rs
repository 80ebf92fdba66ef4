//! HTTP gateway for the Linklet URL shortener.
//!
//! Exposes the shortener over a small JSON/redirect API and renders QR
//! codes for short links. The binary in `bin/http` wires it to an
//! in-memory store; tests build the [`Router`](axum::Router) directly.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod qr;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use qr::{PngQrRenderer, QrRenderer, QrSettings, RenderError};
pub use state::AppState;
