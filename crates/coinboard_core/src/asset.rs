/// One cryptocurrency snapshot as received from the price feed.
///
/// Every field keeps the feed's string representation. Records are never
/// edited in place; a newer fetch replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Asset {
    pub id: String,
    pub rank: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: String,
    pub market_cap_usd: String,
    pub change_percent_24hr: String,
}

/// Parses a numeric feed value for display or comparison.
///
/// Empty, non-numeric and non-finite values yield `None`.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
