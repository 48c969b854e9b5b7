use super::fnv::{fingerprint, hash32};

/// Index of the first candidate bucket for `s`.
///
/// # Panics
///
/// Panics if `num_buckets` is zero.
pub fn primary_bucket(s: &str, num_buckets: u16) -> u16 {
    (hash32(s) % u32::from(num_buckets)) as u16
}

/// The other candidate bucket for a fingerprint stored in `bucket`.
///
/// Self-inverse for fixed `fp` and `num_buckets`: applying it to its own
/// result gives back `bucket`. The offset hashes the decimal rendering of
/// `fp`, and `num_buckets` is treated as a power of two.
pub fn alternate_bucket(bucket: u16, fp: u16, num_buckets: u16) -> u16 {
    let fp_hash = hash32(&fp.to_string());
    let mask = u32::from(num_buckets.wrapping_sub(1));
    let offset = (fp_hash | 1) & mask;
    ((u32::from(bucket) ^ offset) & mask) as u16
}

/// `(fingerprint, primary, alternate)` for `s` in a table of `num_buckets`.
///
/// # Panics
///
/// Panics if `num_buckets` is zero.
pub fn candidate_buckets(s: &str, num_buckets: u16) -> (u16, u16, u16) {
    let fp = fingerprint(s);
    let i1 = primary_bucket(s, num_buckets);
    let i2 = alternate_bucket(i1, fp, num_buckets);
    (fp, i1, i2)
}
