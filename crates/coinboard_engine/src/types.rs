use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Asset record in the feed's wire shape.
///
/// The same shape is used for stored favorites. Values are kept as strings;
/// `null` decodes to an empty string and bare numbers to their text form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(deserialize_with = "feed_string")]
    pub id: String,
    #[serde(default, deserialize_with = "feed_string")]
    pub rank: String,
    #[serde(default, deserialize_with = "feed_string")]
    pub name: String,
    #[serde(default, deserialize_with = "feed_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "feed_string")]
    pub price_usd: String,
    #[serde(default, deserialize_with = "feed_string")]
    pub market_cap_usd: String,
    #[serde(
        rename = "changePercent24Hr",
        default,
        deserialize_with = "feed_string"
    )]
    pub change_percent_24hr: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedValue {
    Text(String),
    Number(serde_json::Number),
}

fn feed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FeedValue>::deserialize(deserializer)? {
        Some(FeedValue::Text(text)) => text,
        Some(FeedValue::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub assets: Vec<AssetRecord>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ListingFetched(Result<Listing, FetchError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    EngineUnavailable,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed listing"),
            FailureKind::EngineUnavailable => write!(f, "engine unavailable"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
