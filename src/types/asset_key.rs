use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Characters of the encoded SHA-256 kept in a content hash.
pub const CONTENT_HASH_LEN: usize = 8;

/// Short content hash identifying one build of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wrap a hash computed elsewhere, e.g. by a bundler.
    pub fn new(hash: impl Into<String>) -> Self {
        ContentHash(hash.into())
    }

    /// First 8 characters of the URL-safe base64 SHA-256 of `content`.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let mut encoded = URL_SAFE_NO_PAD.encode(hash);
        encoded.truncate(CONTENT_HASH_LEN);

        ContentHash(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lookup key for one build of one asset: `"<asset>:<content hash>"`.
///
/// The digest hashes the rendered string as a whole; this type only keeps
/// callers consistent about how it is put together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(asset: &str, hash: &ContentHash) -> Self {
        AssetKey(format!("{asset}:{}", hash.as_str()))
    }

    pub fn from_content(asset: &str, content: &[u8]) -> Self {
        Self::new(asset, &ContentHash::from_content(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
