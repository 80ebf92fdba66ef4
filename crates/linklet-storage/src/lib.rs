//! Storage backends for the mapping table.
//!
//! Only an in-memory backend exists; the [`Repository`] trait is the seam
//! for anything durable.

pub mod memory;

pub use linklet_core::{Mapping, ReadRepository, Repository, StorageError, UrlRecord};
pub use memory::InMemoryRepository;
