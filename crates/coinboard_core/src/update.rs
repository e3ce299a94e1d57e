use crate::favorites::{self, AddOutcome, RejectReason};
use crate::{sort_by, AppState, Effect, FavoriteSet, LoadPhase, Msg, Notice, FAVORITES_CAPACITY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            if state.phase() == LoadPhase::Idle {
                state.begin_loading();
                vec![Effect::FetchListing, Effect::LoadFavorites]
            } else {
                Vec::new()
            }
        }
        Msg::FavoritesLoaded(snapshot) => {
            state.replace_favorites(FavoriteSet::load(snapshot));
            Vec::new()
        }
        Msg::ListingFetched { assets, fetched_at } => {
            // Late responses after the session left Loading are dropped.
            if state.phase() == LoadPhase::Loading {
                state.apply_listing(assets, fetched_at);
            }
            Vec::new()
        }
        Msg::ListingFailed { message } => {
            if state.phase() == LoadPhase::Loading {
                state.apply_fetch_failure(message);
            }
            Vec::new()
        }
        Msg::SortClicked(key) => {
            state.clear_notice();
            let (sorted, next) = sort_by(state.assets(), key, state.sort_state());
            state.apply_sort(sorted, next);
            Vec::new()
        }
        Msg::AddFavoriteClicked { id } => {
            state.clear_notice();
            add_favorite(&mut state, id)
        }
        Msg::RemoveFavoriteClicked { id } => {
            state.clear_notice();
            let remaining = favorites::remove(state.take_favorites(), &id);
            let snapshot = remaining.snapshot();
            state.replace_favorites(remaining);
            vec![Effect::PersistFavorites(snapshot)]
        }
        Msg::SeeMoreClicked => {
            state.clear_notice();
            state.reveal_more();
            Vec::new()
        }
        Msg::PersistFailed { message } => {
            state.set_notice(Notice::PersistFailed { message });
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn add_favorite(state: &mut AppState, id: String) -> Vec<Effect> {
    let Some(asset) = state.find_asset(&id).cloned() else {
        state.set_notice(Notice::UnknownAsset { id });
        return Vec::new();
    };
    if state.favorites().is_favorite(&id) {
        state.set_notice(Notice::AlreadyFavorite { id });
        return Vec::new();
    }

    let (next, outcome) = favorites::add(state.take_favorites(), &asset);
    let snapshot = next.snapshot();
    state.replace_favorites(next);
    match outcome {
        AddOutcome::Added => vec![Effect::PersistFavorites(snapshot)],
        AddOutcome::Rejected(RejectReason::CapacityExceeded) => {
            state.set_notice(Notice::CapacityExceeded {
                capacity: FAVORITES_CAPACITY,
            });
            Vec::new()
        }
    }
}
