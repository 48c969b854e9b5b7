use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use thiserror::Error;

use crate::digest::format::{DigestFormat, EMPTY_SLOT};
use crate::digest::Digest;

/// Standard alphabet, tolerant of non-canonical trailing bits the way browser
/// and Node decoders are.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Digest is empty")]
    Empty,
    #[error("Digest is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Digest is {len} bytes, shorter than its header")]
    TooShort { len: usize },
    #[error("Unsupported digest version: {0}")]
    UnsupportedVersion(u8),
}

/// Decode a URL-safe base64 digest.
///
/// Never fails: any rejected input yields [`Digest::invalid`].
pub fn decode(encoded: &str) -> Digest {
    match try_decode(encoded) {
        Ok(digest) => digest,
        Err(error) => {
            tracing::debug!(%error, input_len = encoded.len(), "Rejected cache digest");
            Digest::invalid()
        }
    }
}

/// Decode a URL-safe base64 digest, reporting why it was rejected.
///
/// A body shorter than the header promises is not an error; missing cells
/// read as empty slots.
pub fn try_decode(encoded: &str) -> Result<Digest, DecodeError> {
    let format = DigestFormat::v1();

    // 1. Non-empty
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }

    // 2. Base64
    let bytes = LENIENT_STANDARD.decode(to_standard_base64(encoded))?;

    // 3. Header present
    if bytes.len() < format.header_len {
        return Err(DecodeError::TooShort { len: bytes.len() });
    }

    // 4. Version
    let version = bytes[0];
    if version != format.version {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let num_buckets = u16::from_be_bytes([bytes[1], bytes[2]]);
    let cell_count = format.cell_count(num_buckets);

    let body = &bytes[format.header_len..];
    let mut cells = vec![EMPTY_SLOT; cell_count];
    for (cell, pair) in cells.iter_mut().zip(body.chunks_exact(2)) {
        *cell = u16::from_be_bytes([pair[0], pair[1]]);
    }

    let present = (body.len() / 2).min(cell_count);
    if present < cell_count {
        tracing::trace!(num_buckets, expected = cell_count, present, "Truncated cache digest body");
    }

    Ok(Digest::from_parts(version, num_buckets, cells))
}

/// Undo the URL-safe alphabet and restore stripped padding.
fn to_standard_base64(encoded: &str) -> String {
    let mut standard: String = encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let rem = standard.len() % 4;
    if rem != 0 {
        standard.extend(std::iter::repeat('=').take(4 - rem));
    }
    standard
}
