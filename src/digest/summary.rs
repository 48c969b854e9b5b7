use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// Point-in-time description of a digest, for logs and debugging endpoints.
///
/// Invalid digests report zero for every field but `valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestSummary {
    pub valid: bool,
    pub version: u8,
    pub num_buckets: u16,
    pub capacity: usize,
    pub occupied: usize,
    pub load_factor: f64,
}

impl DigestSummary {
    pub fn of(digest: &Digest) -> Self {
        let capacity = digest.capacity();
        let occupied = digest.occupied();
        let load_factor = if capacity == 0 {
            0.0
        } else {
            occupied as f64 / capacity as f64
        };
        debug_assert!((0.0..=1.0).contains(&load_factor), "load factor {load_factor} out of range");

        Self {
            valid: digest.is_valid(),
            version: digest.version(),
            num_buckets: digest.num_buckets(),
            capacity,
            occupied,
            load_factor,
        }
    }
}
