use crate::digest::format::{EMPTY_SLOT, FINGERPRINT_MASK};

pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;

const LOW_32: u64 = 0xFFFF_FFFF;

/// 32-bit FNV-1a over the UTF-16 code units of `s`.
///
/// Code units rather than UTF-8 bytes, so non-ASCII keys hash the same way
/// they do in JavaScript encoders. The multiply is done in 64 bits and masked
/// back to 32 after every step.
pub fn hash32(s: &str) -> u32 {
    let mut h = u64::from(FNV_OFFSET_BASIS);
    for unit in s.encode_utf16() {
        h ^= u64::from(unit);
        h = (h * u64::from(FNV_PRIME)) & LOW_32;
    }
    h as u32
}

/// Low 12 bits of [`hash32`], never zero.
pub fn fingerprint(s: &str) -> u16 {
    let fp = (hash32(s) & u32::from(FINGERPRINT_MASK)) as u16;
    if fp == EMPTY_SLOT {
        1
    } else {
        fp
    }
}
