//! Approximate membership queries against a decoded [`Digest`].
//!
//! Answers are one-sided: a `false` is definite, a `true` may be a
//! fingerprint collision.

use crate::digest::Digest;
use crate::hash::candidate_buckets;
use crate::types::AssetKey;

impl Digest {
    /// Whether `item` might be in the digest.
    ///
    /// Always `false` for an invalid or empty digest.
    pub fn lookup(&self, item: &str) -> bool {
        if !self.is_valid() || self.num_buckets() == 0 {
            return false;
        }

        let (fp, i1, i2) = candidate_buckets(item, self.num_buckets());
        self.bucket_contains(i1, fp) || self.bucket_contains(i2, fp)
    }

    pub fn contains_key(&self, key: &AssetKey) -> bool {
        self.lookup(key.as_str())
    }

    /// The items this digest does not report as cached, in input order.
    pub fn uncached<'a, I, K>(&self, items: I) -> Vec<&'a K>
    where
        I: IntoIterator<Item = &'a K>,
        K: AsRef<str> + ?Sized + 'a,
    {
        items
            .into_iter()
            .filter(|item| !self.lookup((*item).as_ref()))
            .collect()
    }

    fn bucket_contains(&self, index: u16, fp: u16) -> bool {
        self.bucket(index)
            .is_some_and(|cells| cells.iter().any(|&cell| cell == fp))
    }
}
