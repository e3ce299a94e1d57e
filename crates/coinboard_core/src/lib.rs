//! Coinboard core: pure session state machine and view-model helpers.
mod asset;
mod effect;
pub mod favorites;
mod msg;
pub mod sort;
mod state;
mod update;
mod view_model;
mod window;

pub use asset::{parse_numeric, Asset};
pub use effect::Effect;
pub use favorites::{AddOutcome, FavoriteSet, RejectReason, FAVORITES_CAPACITY};
pub use msg::Msg;
pub use sort::{sort_by, SortDirection, SortKey, SortState, UnknownSortKey};
pub use state::{AppState, LoadPhase, Notice};
pub use update::update;
pub use view_model::{AppViewModel, AssetRowView, FavoriteRowView};
pub use window::{PaginationWindow, PAGE_SIZE};
