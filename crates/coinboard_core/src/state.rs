use std::fmt;

use crate::view_model::{AppViewModel, AssetRowView, FavoriteRowView};
use crate::{Asset, FavoriteSet, PaginationWindow, SortState, FAVORITES_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// User-visible message attached to the view until the next user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CapacityExceeded { capacity: usize },
    AlreadyFavorite { id: String },
    UnknownAsset { id: String },
    PersistFailed { message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CapacityExceeded { capacity } => {
                write!(f, "You can only add up to {capacity} favorite currencies.")
            }
            Notice::AlreadyFavorite { id } => write!(f, "{id} is already in your favorites."),
            Notice::UnknownAsset { id } => write!(f, "No asset with id {id:?} in the listing."),
            Notice::PersistFailed { message } => {
                write!(f, "Favorites could not be saved: {message}")
            }
        }
    }
}

/// Session state owned by the coordinator. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: LoadPhase,
    assets: Vec<Asset>,
    favorites: FavoriteSet,
    sort: SortState,
    window: PaginationWindow,
    fetched_at: Option<String>,
    fetch_error: Option<String>,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn window(&self) -> PaginationWindow {
        self.window
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let visible = self.window.visible(self.assets.len());
        let rows = self.assets[..visible]
            .iter()
            .enumerate()
            .map(|(index, asset)| AssetRowView {
                position: index + 1,
                is_favorite: self.favorites.is_favorite(&asset.id),
                asset: asset.clone(),
            })
            .collect();
        let favorites = self
            .favorites
            .iter()
            .enumerate()
            .map(|(index, asset)| FavoriteRowView {
                position: index + 1,
                asset: asset.clone(),
            })
            .collect();

        AppViewModel {
            phase: self.phase,
            favorites,
            favorites_capacity: FAVORITES_CAPACITY,
            rows,
            total_assets: self.assets.len(),
            window: self.window.size(),
            has_more: self.window.has_more(self.assets.len()),
            sort: self.sort,
            fetched_at: self.fetched_at.clone(),
            fetch_error: self.fetch_error.clone(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
        self.dirty = true;
    }

    pub(crate) fn apply_listing(&mut self, assets: Vec<Asset>, fetched_at: String) {
        self.phase = LoadPhase::Ready;
        self.assets = assets;
        self.sort = SortState::default();
        self.window = PaginationWindow::initial();
        self.fetched_at = Some(fetched_at);
        self.fetch_error = None;
        self.dirty = true;
    }

    pub(crate) fn apply_fetch_failure(&mut self, message: String) {
        self.phase = LoadPhase::Error;
        self.assets.clear();
        self.fetch_error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn apply_sort(&mut self, assets: Vec<Asset>, sort: SortState) {
        self.assets = assets;
        self.sort = sort;
        self.dirty = true;
    }

    pub(crate) fn reveal_more(&mut self) {
        self.window = self.window.reveal();
        self.dirty = true;
    }

    pub(crate) fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub(crate) fn take_favorites(&mut self) -> FavoriteSet {
        std::mem::take(&mut self.favorites)
    }

    pub(crate) fn replace_favorites(&mut self, favorites: FavoriteSet) {
        self.favorites = favorites;
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
