// Read-only after decode:
// no insert
// no delete
// no interior mutability

use crate::digest::format::{DigestFormat, BUCKET_SIZE, EMPTY_SLOT};
use crate::digest::summary::DigestSummary;

/// A decoded cache digest.
///
/// Built once by [`decode`](crate::decode) and never mutated afterwards, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    valid: bool,
    version: u8,
    num_buckets: u16,
    cells: Box<[u16]>,
}

impl Digest {
    /// A digest that reports nothing as cached.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            version: 0,
            num_buckets: 0,
            cells: Box::default(),
        }
    }

    /// Decode `encoded`, see [`decode`](crate::decode).
    pub fn decode(encoded: &str) -> Self {
        crate::digest::decoder::decode(encoded)
    }

    pub(crate) fn from_parts(version: u8, num_buckets: u16, cells: Vec<u16>) -> Self {
        debug_assert_eq!(cells.len(), DigestFormat::v1().cell_count(num_buckets));
        Self {
            valid: true,
            version,
            num_buckets,
            cells: cells.into_boxed_slice(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn num_buckets(&self) -> u16 {
        self.num_buckets
    }

    /// Total slots in the table.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Slots holding a fingerprint.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY_SLOT).count()
    }

    /// The `BUCKET_SIZE` cells of bucket `index`, or `None` when out of range.
    pub fn bucket(&self, index: u16) -> Option<&[u16]> {
        let start = usize::from(index) * BUCKET_SIZE;
        self.cells.get(start..start + BUCKET_SIZE)
    }

    pub fn summary(&self) -> DigestSummary {
        DigestSummary::of(self)
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::invalid()
    }
}
