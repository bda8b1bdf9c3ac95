use crate::shortkey::ShortKey;
use md5::{Digest, Md5};
use std::fmt::Display;

/// A 32-character lowercase hexadecimal MD5 digest of a long URL.
///
/// The digest is the key space for one URL: every short key the
/// allocator can hand out for it is one of the digest's prefixes, from
/// [`ShortKey::MIN_LEN`] characters up to the full digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDigest(String);

impl UrlDigest {
    /// Computes the digest of a long URL.
    ///
    /// MD5 is kept for bit-for-bit compatibility with short keys
    /// already handed out under the same scheme.
    pub fn of(long_url: &str) -> Self {
        Self(hex::encode(Md5::digest(long_url.as_bytes())))
    }

    /// Returns the digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest length in hex characters (always 32 for MD5).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The prefix of the digest with the given length, as a short key.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the digest length.
    pub fn prefix_key(&self, len: usize) -> ShortKey {
        ShortKey::new_unchecked(&self.0[..len])
    }

    /// The full digest as a short key, the fallback used when every
    /// shorter prefix is taken.
    pub fn full_key(&self) -> ShortKey {
        ShortKey::new_unchecked(self.0.as_str())
    }
}

impl Display for UrlDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
