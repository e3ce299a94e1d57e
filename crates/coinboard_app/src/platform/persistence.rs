use anyhow::Context;
use coinboard_core::Asset;
use coinboard_engine::{decode_favorites, encode_favorites, AssetRecord, KeyValueStore};
use coinboard_logging::{board_debug, board_info, board_warn};

/// The single storage key holding the favorites snapshot.
pub(crate) const FAVORITES_KEY: &str = "favorites";

/// Reads stored favorites. Any failure degrades to an empty list.
pub(crate) fn load_favorites(store: &dyn KeyValueStore) -> Vec<Asset> {
    let content = match store.read(FAVORITES_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => {
            board_debug!("No stored favorites yet");
            return Vec::new();
        }
        Err(err) => {
            board_warn!("Failed to read stored favorites: {}", err);
            return Vec::new();
        }
    };

    let records = match decode_favorites(&content) {
        Ok(records) => records,
        Err(err) => {
            board_warn!("Failed to parse stored favorites: {}", err);
            return Vec::new();
        }
    };

    let favorites: Vec<Asset> = records.into_iter().map(asset_from_record).collect();
    board_info!("Loaded {} stored favorites", favorites.len());
    favorites
}

pub(crate) fn save_favorites(store: &dyn KeyValueStore, favorites: &[Asset]) -> anyhow::Result<()> {
    let records: Vec<AssetRecord> = favorites.iter().map(record_from_asset).collect();
    let content = encode_favorites(&records).context("serializing favorites")?;
    store
        .write(FAVORITES_KEY, &content)
        .context("writing favorites")?;
    board_debug!("Persisted {} favorites", favorites.len());
    Ok(())
}

pub(crate) fn asset_from_record(record: AssetRecord) -> Asset {
    Asset {
        id: record.id,
        rank: record.rank,
        name: record.name,
        symbol: record.symbol,
        price_usd: record.price_usd,
        market_cap_usd: record.market_cap_usd,
        change_percent_24hr: record.change_percent_24hr,
    }
}

fn record_from_asset(asset: &Asset) -> AssetRecord {
    AssetRecord {
        id: asset.id.clone(),
        rank: asset.rank.clone(),
        name: asset.name.clone(),
        symbol: asset.symbol.clone(),
        price_usd: asset.price_usd.clone(),
        market_cap_usd: asset.market_cap_usd.clone(),
        change_percent_24hr: asset.change_percent_24hr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use coinboard_engine::FileStore;
    use tempfile::TempDir;

    use super::*;

    fn bitcoin() -> Asset {
        Asset {
            id: "bitcoin".to_string(),
            rank: "1".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price_usd: "67000.5".to_string(),
            market_cap_usd: "1320000000000".to_string(),
            change_percent_24hr: "0.75".to_string(),
        }
    }

    #[test]
    fn favorites_survive_a_restart() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("state"));

        save_favorites(&store, &[bitcoin()]).unwrap();

        let reopened = FileStore::new(temp.path().join("state"));
        assert_eq!(load_favorites(&reopened), vec![bitcoin()]);
    }

    #[test]
    fn first_use_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("favorites.json"), "{not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn stored_value_uses_feed_field_names() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        save_favorites(&store, &[bitcoin()]).unwrap();

        let raw = fs::read_to_string(temp.path().join("favorites.json")).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"priceUsd\":\"67000.5\""));
        assert!(raw.contains("\"changePercent24Hr\":\"0.75\""));
    }

    #[test]
    fn write_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = FileStore::new(blocker);

        let err = save_favorites(&store, &[bitcoin()]).unwrap_err();
        assert!(format!("{err:#}").contains("writing favorites"));
    }
}
