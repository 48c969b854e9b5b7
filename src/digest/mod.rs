pub mod decoder;
pub mod digest;
pub mod format;
pub mod summary;

pub use decoder::{decode, try_decode, DecodeError};
pub use digest::Digest;
pub use format::{DigestFormat, BUCKET_SIZE, EMPTY_SLOT, FINGERPRINT_BITS, FORMAT_VERSION, HEADER_LEN};
pub use summary::DigestSummary;
