use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use coinboard_core::{update, AppState, LoadPhase, Msg};
use coinboard_engine::{EngineHandle, FileStore};
use coinboard_logging::{board_debug, board_info};

use super::effects::EffectRunner;
use super::ui;
use super::ui::input::{parse_command, Command};
use crate::config::AppConfig;

/// Everything the session loop reacts to, in arrival order.
pub enum AppEvent {
    /// Message produced by an effect or the engine.
    Dispatch(Msg),
    /// Raw line typed by the user.
    Input(String),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app(config: AppConfig, once: bool) -> anyhow::Result<()> {
    board_info!(
        "Starting coinboard: endpoint={} storage={:?}",
        config.endpoint,
        config.storage_dir
    );

    let (msg_tx, msg_rx) = mpsc::channel::<AppEvent>();
    let engine = EngineHandle::new(config.fetch_settings());
    let store = Arc::new(FileStore::new(config.storage_dir.clone()));
    let runner = EffectRunner::new(engine, store, msg_tx.clone());

    let mut session = Session::new(runner);
    let mut out = io::stdout();

    session.dispatch(Msg::SessionStarted);
    if !once {
        spawn_input_reader(msg_tx);
        writeln!(out, "{}", ui::constants::HELP_TEXT)?;
        session.flush(&mut out, true)?;
    }
    drive(&mut session, &msg_rx, &mut out, once)?;

    board_info!("Session ended");
    Ok(())
}

/// Applies events until the user quits. Once no more input can arrive
/// (`--once`, or stdin closed), waits for both startup loads, renders a
/// final time and returns.
fn drive(
    session: &mut Session,
    events: &mpsc::Receiver<AppEvent>,
    out: &mut impl Write,
    once: bool,
) -> io::Result<()> {
    let mut input_closed = once;
    while let Ok(event) = events.recv() {
        let mut typed = false;
        match event {
            AppEvent::Dispatch(msg) => session.dispatch(msg),
            AppEvent::Input(line) => {
                typed = true;
                match parse_command(&line) {
                    Ok(Some(Command::Dispatch(msg))) => session.dispatch(msg),
                    Ok(Some(Command::Help)) => writeln!(out, "{}", ui::constants::HELP_TEXT)?,
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(err) => writeln!(out, "{err} (type `help` for commands)")?,
                }
            }
            AppEvent::InputClosed => {
                board_debug!("Input closed");
                input_closed = true;
            }
        }

        if input_closed {
            if session.settled() {
                session.flush(out, false)?;
                break;
            }
            continue;
        }
        let rendered = session.flush(out, true)?;
        if typed && !rendered {
            session.prompt(out)?;
        }
    }
    Ok(())
}

/// Owner of the session state; applies messages one at a time.
struct Session {
    state: AppState,
    runner: EffectRunner,
    favorites_loaded: bool,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            favorites_loaded: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        board_debug!("dispatch {}", msg_label(&msg));
        if matches!(msg, Msg::FavoritesLoaded(_)) {
            self.favorites_loaded = true;
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Both startup loads have resolved.
    fn settled(&self) -> bool {
        self.favorites_loaded
            && matches!(self.state.phase(), LoadPhase::Ready | LoadPhase::Error)
    }

    /// Renders if anything changed since the last render. Returns whether it did.
    fn flush(&mut self, out: &mut impl Write, with_prompt: bool) -> io::Result<bool> {
        if !self.state.consume_dirty() {
            return Ok(false);
        }
        let view = self.state.view();
        writeln!(out)?;
        write!(out, "{}", ui::render::render(&view))?;
        if with_prompt {
            self.prompt(out)?;
        }
        out.flush()?;
        Ok(true)
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", ui::constants::PROMPT)?;
        out.flush()
    }
}

fn spawn_input_reader(msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if msg_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = msg_tx.send(AppEvent::InputClosed);
    });
}

fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::SessionStarted => "SessionStarted",
        Msg::FavoritesLoaded(_) => "FavoritesLoaded",
        Msg::ListingFetched { .. } => "ListingFetched",
        Msg::ListingFailed { .. } => "ListingFailed",
        Msg::SortClicked(_) => "SortClicked",
        Msg::AddFavoriteClicked { .. } => "AddFavoriteClicked",
        Msg::RemoveFavoriteClicked { .. } => "RemoveFavoriteClicked",
        Msg::SeeMoreClicked => "SeeMoreClicked",
        Msg::PersistFailed { .. } => "PersistFailed",
        Msg::NoticeDismissed => "NoticeDismissed",
        Msg::NoOp => "NoOp",
    }
}

#[cfg(test)]
mod tests {
    use coinboard_engine::{AssetRecord, FetchError, FetchMetadata, Listing, ListingFetcher};
    use tempfile::TempDir;

    use super::*;

    struct TwoAssetFetcher;

    #[async_trait::async_trait]
    impl ListingFetcher for TwoAssetFetcher {
        async fn fetch_listing(&self) -> Result<Listing, FetchError> {
            let record = |id: &str, rank: &str| AssetRecord {
                id: id.to_string(),
                rank: rank.to_string(),
                name: id.to_string(),
                ..AssetRecord::default()
            };
            Ok(Listing {
                assets: vec![record("bitcoin", "1"), record("ethereum", "2")],
                metadata: FetchMetadata {
                    url: "stub://".to_string(),
                    final_url: "stub://".to_string(),
                    redirect_count: 0,
                    content_type: None,
                    byte_len: 0,
                },
            })
        }
    }

    fn session(temp: &TempDir) -> (Session, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let runner = EffectRunner::new(
            EngineHandle::with_fetcher(Arc::new(TwoAssetFetcher)),
            Arc::new(FileStore::new(temp.path().to_path_buf())),
            tx.clone(),
        );
        (Session::new(runner), tx, rx)
    }

    #[test]
    fn closed_input_waits_for_the_listing() {
        let temp = TempDir::new().unwrap();
        let (mut session, tx, rx) = session(&temp);

        // Scripted input that ends before the startup loads resolve.
        tx.send(AppEvent::Input("add bitcoin".to_string())).unwrap();
        tx.send(AppEvent::InputClosed).unwrap();
        session.dispatch(Msg::SessionStarted);

        let mut out = Vec::new();
        drive(&mut session, &rx, &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(session.settled());
        assert!(text.contains("add bitcoin"));
        assert!(text.contains("add ethereum"));
        assert!(text.contains("Status: showing 2 of 2"));
    }

    #[test]
    fn once_mode_renders_after_both_loads() {
        let temp = TempDir::new().unwrap();
        let (mut session, _tx, rx) = session(&temp);
        session.dispatch(Msg::SessionStarted);

        let mut out = Vec::new();
        drive(&mut session, &rx, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Favorites (0/3)"));
        assert!(text.contains("add ethereum"));
        assert!(!text.contains(ui::constants::PROMPT));
    }

    #[test]
    fn quit_stops_the_loop() {
        let temp = TempDir::new().unwrap();
        let (mut session, tx, rx) = session(&temp);
        tx.send(AppEvent::Input("quit".to_string())).unwrap();

        let mut out = Vec::new();
        drive(&mut session, &rx, &mut out, false).unwrap();

        assert!(!session.settled());
    }
}
