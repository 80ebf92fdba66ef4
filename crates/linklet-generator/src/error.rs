use thiserror::Error;

/// Errors returned when configuring a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("code length must be at least 1")]
    ZeroLength,
    #[error("code length {length} exceeds the short code limit of {max}")]
    TooLong { length: usize, max: usize },
    #[error("alphabet must contain at least two symbols, got {0}")]
    AlphabetTooSmall(usize),
    #[error("alphabet symbol {0:?} is not URL-safe")]
    UnsafeSymbol(char),
    #[error("alphabet symbol {0:?} appears more than once")]
    DuplicateSymbol(char),
}
