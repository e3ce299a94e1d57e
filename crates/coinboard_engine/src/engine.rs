use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use coinboard_logging::{board_debug, board_error, board_info, board_warn};

use crate::fetch::{FetchSettings, ListingFetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    FetchListing,
}

/// Handle to the background thread that owns the async runtime.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ListingFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start engine runtime: {}", err);
                    while let Ok(command) = cmd_rx.recv() {
                        reject_command(command, &event_tx, &err.to_string());
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_listing(&self) {
        if self.cmd_tx.send(EngineCommand::FetchListing).is_err() {
            board_warn!("Engine thread is gone; fetch request dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        self.event_rx
            .lock()
            .map_err(|_| RecvTimeoutError::Disconnected)?
            .recv_timeout(timeout)
    }

    /// Receiving side only. Holding it does not keep the engine thread alive.
    pub fn events(&self) -> EngineEvents {
        EngineEvents {
            event_rx: self.event_rx.clone(),
        }
    }
}

#[derive(Clone)]
pub struct EngineEvents {
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineEvents {
    /// Blocks for the next event. `None` once every `EngineHandle` is dropped
    /// and the engine thread has exited.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn ListingFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchListing => {
            let result = fetcher.fetch_listing().await;
            match &result {
                Ok(listing) => {
                    let meta = &listing.metadata;
                    board_info!(
                        "Listing fetched: {} assets, {} bytes",
                        listing.assets.len(),
                        meta.byte_len
                    );
                    board_debug!(
                        "Listing source: url={} final_url={} redirects={} content_type={}",
                        meta.url,
                        meta.final_url,
                        meta.redirect_count,
                        meta.content_type.as_deref().unwrap_or("-")
                    );
                }
                Err(err) => board_warn!("Listing fetch failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::ListingFetched(result));
        }
    }
}

fn reject_command(command: EngineCommand, event_tx: &mpsc::Sender<EngineEvent>, reason: &str) {
    match command {
        EngineCommand::FetchListing => {
            let _ = event_tx.send(EngineEvent::ListingFetched(Err(FetchError::new(
                FailureKind::EngineUnavailable,
                reason,
            ))));
        }
    }
}
