#![allow(dead_code)]

use std::sync::Once;

use coinboard_core::{update, AppState, Asset, Effect, Msg};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(coinboard_logging::initialize_for_tests);
}

/// Asset whose numeric fields derive from `n` so ordering is predictable.
pub fn asset(n: usize) -> Asset {
    Asset {
        id: format!("coin-{n}"),
        rank: n.to_string(),
        name: format!("Coin {n:03}"),
        symbol: format!("C{n:03}"),
        price_usd: format!("{}.5", n * 10),
        market_cap_usd: format!("{}", n * 1_000_000),
        change_percent_24hr: format!("{}", n as f64 / 10.0 - 2.0),
    }
}

pub fn assets(count: usize) -> Vec<Asset> {
    (1..=count).map(asset).collect()
}

pub fn ids(assets: &[Asset]) -> Vec<String> {
    assets.iter().map(|a| a.id.clone()).collect()
}

/// Runs session start and delivers `listing` as a successful fetch.
pub fn ready_with(listing: Vec<Asset>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::SessionStarted);
    let (state, _) = update(state, Msg::FavoritesLoaded(Vec::new()));
    let (state, _) = update(
        state,
        Msg::ListingFetched {
            assets: listing,
            fetched_at: "2026-10-18T12:00:00Z".to_string(),
        },
    );
    state
}

pub fn add(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::AddFavoriteClicked { id: id.to_string() })
}
