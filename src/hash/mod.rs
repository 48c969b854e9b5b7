//! Hashing and bucket arithmetic shared by every conforming encoder and decoder.
//!
//! All functions here are pure and platform independent; their outputs are
//! part of the wire format and must not change.

pub mod buckets;
pub mod fnv;

pub use buckets::{alternate_bucket, candidate_buckets, primary_bucket};
pub use fnv::{fingerprint, hash32, FNV_OFFSET_BASIS, FNV_PRIME};
