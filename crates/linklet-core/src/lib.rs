//! Core types and traits for the Linklet URL shortener.
//!
//! This crate provides the shared domain model (short codes, URL records,
//! mappings), the storage traits implemented by `linklet-storage` and the
//! [`Shortener`] trait implemented by `linklet-shortener` and consumed by
//! the HTTP gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{Mapping, ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
