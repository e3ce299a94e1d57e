use std::sync::{mpsc, Arc};
use std::thread;

use chrono::{SecondsFormat, Utc};
use coinboard_core::{Effect, Msg};
use coinboard_engine::{EngineEvent, EngineHandle, KeyValueStore};
use coinboard_logging::{board_debug, board_error, board_info, board_warn};

use super::app::AppEvent;
use super::persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
    msg_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        store: Arc<dyn KeyValueStore>,
        msg_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let runner = Self {
            engine,
            store,
            msg_tx,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListing => {
                    board_info!("FetchListing");
                    self.engine.fetch_listing();
                }
                Effect::LoadFavorites => {
                    let favorites = persistence::load_favorites(self.store.as_ref());
                    self.send(Msg::FavoritesLoaded(favorites));
                }
                Effect::PersistFavorites(snapshot) => {
                    if let Err(err) = persistence::save_favorites(self.store.as_ref(), &snapshot)
                    {
                        board_error!("Failed to persist {} favorites: {:#}", snapshot.len(), err);
                        self.send(Msg::PersistFailed {
                            message: format!("{err:#}"),
                        });
                    }
                }
            }
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(AppEvent::Dispatch(msg));
    }

    fn spawn_event_loop(&self) {
        let events = self.engine.events();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            while let Some(event) = events.recv() {
                let msg = match event {
                    EngineEvent::ListingFetched(Ok(listing)) => Msg::ListingFetched {
                        assets: listing
                            .assets
                            .into_iter()
                            .map(persistence::asset_from_record)
                            .collect(),
                        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    },
                    EngineEvent::ListingFetched(Err(err)) => {
                        board_warn!("Listing unavailable: {}", err);
                        Msg::ListingFailed {
                            message: err.to_string(),
                        }
                    }
                };
                if msg_tx.send(AppEvent::Dispatch(msg)).is_err() {
                    break;
                }
            }
            board_debug!("Engine event stream closed");
        });
    }
}
