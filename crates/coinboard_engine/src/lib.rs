//! Coinboard engine: listing fetch, feed codecs and durable storage.
mod decode;
mod engine;
mod fetch;
mod store;
mod types;

pub use decode::{decode_favorites, decode_listing, encode_favorites, DecodeError};
pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, ListingFetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use store::{ensure_storage_dir, FileStore, KeyValueStore, StoreError};
pub use types::{AssetRecord, EngineEvent, FailureKind, FetchError, FetchMetadata, Listing};
