use crate::{Asset, LoadPhase, Notice, SortState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    pub favorites: Vec<FavoriteRowView>,
    pub favorites_capacity: usize,
    /// Leading rows of the sorted listing, clamped to the window.
    pub rows: Vec<AssetRowView>,
    pub total_assets: usize,
    pub window: usize,
    pub has_more: bool,
    pub sort: SortState,
    pub fetched_at: Option<String>,
    pub fetch_error: Option<String>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRowView {
    pub position: usize,
    pub asset: Asset,
    /// Gates the Add / Added control.
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRowView {
    pub position: usize,
    pub asset: Asset,
}
