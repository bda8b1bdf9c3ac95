use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated short key for a stored URL mapping.
///
/// Short keys are prefixes of a 32-character MD5 hex digest, so they
/// are 7-32 characters long and contain only lowercase hexadecimal
/// characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortKey(String);

impl ShortKey {
    /// Shortest key the system hands out.
    pub const MIN_LEN: usize = 7;
    /// Longest possible key: the full digest.
    pub const MAX_LEN: usize = 32;

    /// Creates a new `ShortKey` after validating the input.
    ///
    /// Valid keys are 7-32 characters of lowercase hex (`[0-9a-f]`).
    pub fn new(key: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    /// Creates a `ShortKey` without validation.
    ///
    /// Use this only for keys produced by trusted internal sources
    /// (e.g. prefixes taken from a [`UrlDigest`](crate::UrlDigest),
    /// which are lowercase hex by construction).
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key length in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(key: &str) -> std::result::Result<(), CoreError> {
        if key.len() < Self::MIN_LEN || key.len() > Self::MAX_LEN {
            return Err(CoreError::InvalidShortKey(format!(
                "length must be between {} and {}, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                key.len()
            )));
        }

        if !key.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(CoreError::InvalidShortKey(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                key
            )));
        }

        Ok(())
    }
}

impl Display for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(ShortKey::new("abc1234").is_ok());
        assert!(ShortKey::new("0123456789abcdef").is_ok());
        assert!(ShortKey::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn too_short() {
        assert!(ShortKey::new("abc123").is_err());
        assert!(ShortKey::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(ShortKey::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortKey::new("abc123g").is_err());
        assert!(ShortKey::new("ABC1234").is_err());
        assert!(ShortKey::new("abc 123").is_err());
        assert!(ShortKey::new("abc-123").is_err());
    }

    #[test]
    fn display() {
        let key = ShortKey::new("cd69b81").unwrap();
        assert_eq!(key.to_string(), "cd69b81");
    }

    #[test]
    fn to_url() {
        let key = ShortKey::new("cd69b81").unwrap();
        assert_eq!(key.to_url("https://hash.port"), "https://hash.port/cd69b81");
        assert_eq!(
            key.to_url("https://hash.port/"),
            "https://hash.port/cd69b81"
        );
    }
}
