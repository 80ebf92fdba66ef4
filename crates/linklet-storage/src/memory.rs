use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use linklet_core::repository::Result;
use linklet_core::{Mapping, ReadRepository, Repository, ShortCode, StorageError, UrlRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// In-memory storage entry for a URL mapping.
#[derive(Debug, Clone)]
struct StoredRecord {
    /// Insertion order, used to keep `list` stable.
    seq: u64,
    record: UrlRecord,
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
///
/// Records are insert-only: once `insert` returns, the mapping is visible to
/// every subsequent `get` and `list`. A `list` running concurrently with an
/// `insert` may or may not include the new mapping.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<ShortCode, StoredRecord>,
    next_seq: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        trace!(code = %code, "looking up short code");
        Ok(self.storage.get(code).map(|entry| entry.record.clone()))
    }

    async fn list(&self) -> Result<Vec<Mapping>> {
        let mut snapshot: Vec<(u64, Mapping)> = self
            .storage
            .iter()
            .map(|entry| {
                (
                    entry.seq,
                    Mapping {
                        short_code: entry.key().clone(),
                        record: entry.record.clone(),
                    },
                )
            })
            .collect();

        snapshot.sort_unstable_by_key(|(seq, _)| *seq);
        trace!(count = snapshot.len(), "listed mappings");

        Ok(snapshot.into_iter().map(|(_, mapping)| mapping).collect())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.storage.entry(code.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredRecord { seq, record });
                trace!(code = %code, seq, "inserted mapping");
                Ok(())
            }
        }
    }
}
