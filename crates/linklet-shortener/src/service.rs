use async_trait::async_trait;
use linklet_core::{
    Mapping, ReadRepository, Repository, ShortCode, Shortener, ShortenerError, StorageError,
    UrlRecord,
};
use linklet_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use url::Url;

/// How many codes `shorten` draws before giving up on a collision streak.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation, before anything touches the repository
/// - Short code generation
/// - Collision retry: a code already present in the repository is never
///   overwritten; a fresh one is drawn, up to `max_attempts` times
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with the default retry budget.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many codes are drawn per `shorten` call. Values below one
    /// are treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Validates that the URL is present and parses as an absolute URL with
    /// an authority (scheme + host). Syntax only; nothing is fetched.
    pub fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.trim().is_empty() {
            return Err(ShortenerError::EmptyInput);
        }

        let parsed = Url::parse(url)
            .map_err(|e| ShortenerError::InvalidUrl(format!("{}: {}", url, e)))?;

        if !parsed.has_host() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<Mapping, ShortenerError> {
        Self::validate_url(original_url)?;

        for attempt in 1..=self.max_attempts {
            let short_code: ShortCode = self.generator.generate().into();
            let record = UrlRecord::new(original_url);

            match self.repository.insert(&short_code, record.clone()).await {
                Ok(()) => {
                    debug!(code = %short_code, url = %original_url, attempt, "created mapping");
                    return Ok(Mapping { short_code, record });
                }
                Err(StorageError::Conflict(_)) => {
                    warn!(code = %short_code, attempt, "generated short code collided, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ShortenerError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord, ShortenerError> {
        trace!(code = %code, "resolving short code");

        self.repository
            .get(code)
            .await?
            .ok_or_else(|| ShortenerError::NotFound(code.to_string()))
    }

    async fn list(&self) -> Result<Vec<Mapping>, ShortenerError> {
        Ok(self.repository.list().await?)
    }
}
