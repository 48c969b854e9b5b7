pub mod asset_key;

pub use asset_key::{AssetKey, ContentHash};
