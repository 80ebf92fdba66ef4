use std::sync::Arc;

use linklet_core::Shortener;

use crate::qr::QrRenderer;

/// Shared handler state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    renderer: Arc<dyn QrRenderer>,
    base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        renderer: Arc<dyn QrRenderer>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = public_base_url.into();
        Self {
            shortener,
            renderer,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn renderer(&self) -> Arc<dyn QrRenderer> {
        Arc::clone(&self.renderer)
    }

    /// Public address short URLs are built from, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
