//! Decoder and membership test for compact cache digests.
//!
//! A cache digest is a cuckoo filter over the asset keys a client already
//! holds, serialized to URL-safe base64 so it fits in a cookie or header.
//! `cache-digest` decodes that string into an immutable [`Digest`] and answers
//! "might the client already have this asset?" queries against it. Decoding
//! never fails loudly: malformed input yields a digest whose
//! [`is_valid`](Digest::is_valid) is `false` and whose lookups all miss.
//!
//! ```
//! let digest = cache_digest::decode("");
//! assert!(!digest.is_valid());
//! assert!(!digest.lookup("src/js/app.js:DW873Fox"));
//! ```

pub mod digest;
pub mod hash;
pub mod lookup;
pub mod types;

pub use digest::{decode, try_decode, DecodeError, Digest, DigestFormat, DigestSummary};
pub use types::{AssetKey, ContentHash};
