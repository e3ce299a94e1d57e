use crate::{Asset, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session start: kicks off the fetch and the favorites load.
    SessionStarted,
    /// Favorites read back from storage (possibly empty).
    FavoritesLoaded(Vec<Asset>),
    /// Listing response from the fetch collaborator.
    ListingFetched {
        assets: Vec<Asset>,
        fetched_at: String,
    },
    /// Fetch collaborator gave up.
    ListingFailed { message: String },
    /// User clicked a column header.
    SortClicked(SortKey),
    /// User asked to add the asset with this id to favorites.
    AddFavoriteClicked { id: String },
    /// User asked to remove the favorite with this id.
    RemoveFavoriteClicked { id: String },
    /// User clicked "See More".
    SeeMoreClicked,
    /// Writing favorites to storage failed.
    PersistFailed { message: String },
    /// User acknowledged the current notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
