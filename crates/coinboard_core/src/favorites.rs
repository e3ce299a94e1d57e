//! Bounded favorites collection.
//!
//! Operations take the set by value and hand back a new one; persistence is
//! requested by the caller through [`crate::Effect::PersistFavorites`].

use crate::Asset;

/// Maximum number of favorites a session may hold.
pub const FAVORITES_CAPACITY: usize = 3;

/// Ordered asset snapshots, never more than [`FAVORITES_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    entries: Vec<Asset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    CapacityExceeded,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from previously stored snapshots.
    ///
    /// Storage is not trusted to respect the capacity: only the first
    /// [`FAVORITES_CAPACITY`] entries are kept.
    pub fn load(snapshot: Vec<Asset>) -> Self {
        let mut entries = snapshot;
        entries.truncate(FAVORITES_CAPACITY);
        Self { entries }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|asset| asset.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= FAVORITES_CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.entries.iter()
    }

    /// Copy of the entries, in insertion order, for the storage collaborator.
    pub fn snapshot(&self) -> Vec<Asset> {
        self.entries.clone()
    }
}

/// Appends a snapshot of `asset` unless the set is already full.
pub fn add(set: FavoriteSet, asset: &Asset) -> (FavoriteSet, AddOutcome) {
    if set.is_full() {
        return (set, AddOutcome::Rejected(RejectReason::CapacityExceeded));
    }
    let mut entries = set.entries;
    entries.push(asset.clone());
    (FavoriteSet { entries }, AddOutcome::Added)
}

/// Drops every entry with the given id. Unknown ids leave the set as is.
pub fn remove(set: FavoriteSet, id: &str) -> FavoriteSet {
    let mut entries = set.entries;
    entries.retain(|asset| asset.id != id);
    FavoriteSet { entries }
}
