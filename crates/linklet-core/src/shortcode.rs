use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque identifier for a shortened URL.
///
/// Generated codes come from a `Generator` and are built with
/// [`ShortCode::new_unchecked`]. Codes arriving from the outside (e.g. a
/// request path) go through [`ShortCode::new`], which only rejects values
/// that could never have been generated: empty strings and oversized input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

/// Longest code accepted from callers; generators must stay within it.
pub const MAX_LENGTH: usize = 64;

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<()> {
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }

        if code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be at most {}, got {}",
                MAX_LENGTH,
                code.len()
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_code() {
        assert!(ShortCode::new("abc1234").is_ok());
        assert!(ShortCode::new("doesNotExist").is_ok());
        assert!(ShortCode::new("a_b-C").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            ShortCode::new(""),
            Err(CoreError::InvalidShortCode(_))
        ));
    }

    #[test]
    fn rejects_oversized() {
        assert!(ShortCode::new("a".repeat(MAX_LENGTH)).is_ok());
        assert!(ShortCode::new("a".repeat(MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn display_is_raw_code() {
        let code = ShortCode::new_unchecked("V1StGXR");
        assert_eq!(code.to_string(), "V1StGXR");
        assert_eq!(code.as_str(), "V1StGXR");
    }

    #[test]
    fn to_url_joins_base() {
        let code = ShortCode::new_unchecked("abc1234");
        assert_eq!(
            code.to_url("http://localhost:3000"),
            "http://localhost:3000/abc1234"
        );
        assert_eq!(
            code.to_url("http://localhost:3000/"),
            "http://localhost:3000/abc1234"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new_unchecked("abc1234");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"abc1234\"");
    }
}
