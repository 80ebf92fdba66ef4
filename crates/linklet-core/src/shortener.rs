use crate::repository::{Mapping, UrlRecord};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `original_url`, registers it under a fresh short code and
    /// returns the new mapping. The code is resolvable once this returns.
    async fn shorten(&self, original_url: &str) -> Result<Mapping>;

    /// Resolves a short code to its stored URL record.
    /// Returns `Err(NotFound)` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord>;

    /// Lists every mapping currently held.
    async fn list(&self) -> Result<Vec<Mapping>>;
}
