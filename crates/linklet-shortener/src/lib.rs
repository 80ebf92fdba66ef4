//! URL shortener service implementation.
//!
//! [`ShortenerService`] ties a [`Repository`](linklet_core::Repository) to a
//! [`Generator`](linklet_generator::Generator) and implements the
//! [`Shortener`](linklet_core::Shortener) operations on top of them.

pub mod service;

pub use linklet_core::ShortenerError;
pub use service::{ShortenerService, DEFAULT_MAX_ATTEMPTS};
