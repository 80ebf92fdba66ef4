use crate::Generator;
use linklet_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A short code generator using a sequential counter.
///
/// Produces codes like "s000000", "s000001", etc. Codes never repeat within
/// one instance, which makes the output predictable in tests and when poking
/// at a local server.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
