#![allow(dead_code)]

// Test-only encoder. The library never builds digests; these helpers exist so
// tests can produce digests for arbitrary sets.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use cache_digest::digest::{BUCKET_SIZE, EMPTY_SLOT, FORMAT_VERSION};
use cache_digest::hash::{alternate_bucket, candidate_buckets};

const MAX_KICKS: usize = 500;

/// Assets from the skybolt launcher fixture.
pub const FIXTURE_ITEMS: [&str; 4] = [
    "src/css/critical.css:B20ictSB",
    "src/css/main.css:DfFbFQk_",
    "src/js/app.js:DW873Fox",
    "skybolt-launcher:ptJmv_9y",
];

/// `FIXTURE_ITEMS` in a 16-bucket digest, produced by an independent encoder.
pub const FIXTURE_DIGEST: &str = "AQAQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB-UAAAAAAAANhgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAXNAAAAAAAACT4AAAAAAAAAAAAAAAAAAA";

/// `FIXTURE_DIGEST` cut to 60 bytes: buckets 13 and 14 are gone.
pub const TRUNCATED_FIXTURE_DIGEST: &str =
    "AQAQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB-UAAAAAAAANhgAAAAAA";

pub fn build_table(items: &[&str], num_buckets: u16) -> Vec<u16> {
    let mut table = vec![EMPTY_SLOT; usize::from(num_buckets) * BUCKET_SIZE];
    for item in items {
        let (fp, i1, i2) = candidate_buckets(item, num_buckets);
        if try_place(&mut table, i1, fp) || try_place(&mut table, i2, fp) {
            continue;
        }
        relocate(&mut table, i1, fp, num_buckets);
    }
    table
}

pub fn encode_table(table: &[u16], num_buckets: u16) -> String {
    let mut bytes = vec![FORMAT_VERSION];
    bytes.extend_from_slice(&num_buckets.to_be_bytes());
    bytes.extend_from_slice(&[0, 0]);
    for cell in table {
        bytes.extend_from_slice(&cell.to_be_bytes());
    }
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn encode(items: &[&str], num_buckets: u16) -> String {
    encode_table(&build_table(items, num_buckets), num_buckets)
}

pub fn encode_raw(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn try_place(table: &mut [u16], bucket: u16, fp: u16) -> bool {
    let start = usize::from(bucket) * BUCKET_SIZE;
    match table[start..start + BUCKET_SIZE].iter_mut().find(|cell| **cell == EMPTY_SLOT) {
        Some(cell) => {
            *cell = fp;
            true
        }
        None => false,
    }
}

fn relocate(table: &mut [u16], mut bucket: u16, mut fp: u16, num_buckets: u16) {
    for kick in 0..MAX_KICKS {
        let slot = usize::from(bucket) * BUCKET_SIZE + kick % BUCKET_SIZE;
        std::mem::swap(&mut table[slot], &mut fp);
        bucket = alternate_bucket(bucket, fp, num_buckets);
        if try_place(table, bucket, fp) {
            return;
        }
    }
    panic!("test digest with {num_buckets} buckets is full");
}
