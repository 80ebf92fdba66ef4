//! Short code generators.
//!
//! [`RandomGenerator`] is the production generator: fixed-length codes drawn
//! uniformly from a URL-safe alphabet. [`SeqGenerator`] hands out predictable
//! sequential codes and is mostly useful in tests and local debugging.

pub mod error;
pub mod random;
pub mod seq;

use linklet_core::ShortCode;

pub use error::Error;
pub use random::{RandomGenerator, RandomGeneratorSettings, ALPHANUMERIC, URL_SAFE_ALPHABET};
pub use seq::SeqGenerator;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage and
/// give no uniqueness guarantee; the shortener retries on collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces the next candidate short code.
    fn generate(&self) -> Self::Output;
}
