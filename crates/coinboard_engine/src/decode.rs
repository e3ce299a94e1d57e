use serde::Deserialize;

use crate::AssetRecord;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ListingEnvelope {
    data: Vec<AssetRecord>,
}

/// Decode a listing body shaped as `{ "data": [ ... ] }`. Extra fields are ignored.
pub fn decode_listing(bytes: &[u8]) -> Result<Vec<AssetRecord>, DecodeError> {
    let envelope: ListingEnvelope = serde_json::from_slice(bytes)?;
    Ok(envelope.data)
}

/// Decode the stored favorites value: a JSON array of asset records.
pub fn decode_favorites(text: &str) -> Result<Vec<AssetRecord>, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

pub fn encode_favorites(records: &[AssetRecord]) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(records)?)
}
