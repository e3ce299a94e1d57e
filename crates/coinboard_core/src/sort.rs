//! Column sorting for the main listing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{parse_numeric, Asset};

/// Sortable column of the main listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Rank,
    Name,
    Symbol,
    PriceUsd,
    MarketCapUsd,
    ChangePercent24Hr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active column and direction. Defaults to rank, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Rank,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Rank,
        SortKey::Name,
        SortKey::Symbol,
        SortKey::PriceUsd,
        SortKey::MarketCapUsd,
        SortKey::ChangePercent24Hr,
    ];

    /// Field name as used by the feed.
    pub fn column_name(self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Name => "name",
            SortKey::Symbol => "symbol",
            SortKey::PriceUsd => "priceUsd",
            SortKey::MarketCapUsd => "marketCapUsd",
            SortKey::ChangePercent24Hr => "changePercent24Hr",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, SortKey::Name | SortKey::Symbol)
    }

    pub fn raw(self, asset: &Asset) -> &str {
        match self {
            SortKey::Rank => &asset.rank,
            SortKey::Name => &asset.name,
            SortKey::Symbol => &asset.symbol,
            SortKey::PriceUsd => &asset.price_usd,
            SortKey::MarketCapUsd => &asset.market_cap_usd,
            SortKey::ChangePercent24Hr => &asset.change_percent_24hr,
        }
    }

    fn compare(self, a: &Asset, b: &Asset) -> Ordering {
        let (left, right) = (self.raw(a), self.raw(b));
        if !self.is_numeric() {
            return left.cmp(right);
        }
        match (parse_numeric(left), parse_numeric(right)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.cmp(right),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort column {:?}", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank" => Ok(SortKey::Rank),
            "name" => Ok(SortKey::Name),
            "symbol" => Ok(SortKey::Symbol),
            "priceusd" | "price" => Ok(SortKey::PriceUsd),
            "marketcapusd" | "marketcap" | "mcap" => Ok(SortKey::MarketCapUsd),
            "changepercent24hr" | "change" => Ok(SortKey::ChangePercent24Hr),
            _ => Err(UnknownSortKey(s.trim().to_string())),
        }
    }
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// State after the user clicks `key`: same column flips, a new column
    /// starts ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Returns a newly ordered copy of `collection` and the toggled sort state.
///
/// The sort is stable in both directions: records with equal keys keep
/// their relative order.
pub fn sort_by(collection: &[Asset], key: SortKey, current: SortState) -> (Vec<Asset>, SortState) {
    let next = current.toggled(key);
    let mut sorted = collection.to_vec();
    match next.direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    (sorted, next)
}
