// Wire layout, all integers big-endian:
// [0]      version
// [1..3]   bucket count (u16)
// [3..5]   reserved, ignored
// [5..]    bucket_count * BUCKET_SIZE cells, u16 each

/// The only version this crate reads.
pub const FORMAT_VERSION: u8 = 1;
pub const HEADER_LEN: usize = 5;
/// Slots per bucket.
pub const BUCKET_SIZE: usize = 4;
pub const FINGERPRINT_BITS: u32 = 12;
pub const FINGERPRINT_MASK: u16 = (1 << FINGERPRINT_BITS) - 1;
/// Cell value of an unused slot. Fingerprints are never this value.
pub const EMPTY_SLOT: u16 = 0;

/// Layout parameters of a digest encoding.
///
/// Fixed per format version, not per digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DigestFormat {
    pub version: u8,
    pub header_len: usize,
    pub bucket_size: usize,
    pub fingerprint_bits: u32,
}

impl DigestFormat {
    pub const fn v1() -> Self {
        Self {
            version: FORMAT_VERSION,
            header_len: HEADER_LEN,
            bucket_size: BUCKET_SIZE,
            fingerprint_bits: FINGERPRINT_BITS,
        }
    }

    /// Number of cells in a table of `num_buckets` buckets.
    pub fn cell_count(&self, num_buckets: u16) -> usize {
        usize::from(num_buckets) * self.bucket_size
    }

    /// Encoded length of a complete, untruncated digest.
    pub fn encoded_len(&self, num_buckets: u16) -> usize {
        self.header_len + self.cell_count(num_buckets) * 2
    }
}

impl Default for DigestFormat {
    fn default() -> Self {
        Self::v1()
    }
}
