use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Type alias for repository results.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened, stored verbatim.
    pub original_url: String,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl UrlRecord {
    /// Creates a record for `original_url` stamped with the current time.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// A short code together with the record it resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub short_code: ShortCode,
    pub record: UrlRecord,
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Returns a snapshot of every stored mapping.
    ///
    /// Implementations return mappings in insertion order, but callers
    /// must not rely on it.
    async fn list(&self) -> Result<Vec<Mapping>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record. Returns `Err(Conflict)` if the code already
    /// exists; an existing record is never overwritten.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}
