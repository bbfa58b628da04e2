//! Application state shared between the front-end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use bingo_core::commands::PlayerCommand;
use bingo_core::state::GameStateSnapshot;

/// Commands sent from the front-end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Stop the clock and shut down the game loop thread.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Option` marks things that do not exist before `start_game`
/// - the latest snapshot is `Arc`-shared with the game loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_game` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each transition.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Join handle of the game loop thread while it runs.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
