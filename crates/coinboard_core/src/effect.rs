use crate::Asset;

/// I/O intents produced by [`crate::update`] for the runner to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one listing request of this session.
    FetchListing,
    /// Read stored favorites and answer with [`crate::Msg::FavoritesLoaded`].
    LoadFavorites,
    /// Write the full favorites snapshot to durable storage.
    PersistFavorites(Vec<Asset>),
}
