//! Front-end command handlers.
//!
//! These bridge front-end requests to the game loop thread via channels.

use std::sync::mpsc;

use anyhow::{anyhow, bail, Context};

use bingo_core::commands::PlayerCommand;
use bingo_core::constants::CLOCK_PERIOD;
use bingo_core::state::GameStateSnapshot;
use bingo_engine::{GameConfig, GameEngine};

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Build the engine and spawn the game loop.
///
/// Returns the receiving end of the snapshot stream.
pub fn start_game(
    state: &AppState,
    config: GameConfig,
) -> anyhow::Result<mpsc::Receiver<GameStateSnapshot>> {
    let mut running = state.running.lock().map_err(|e| anyhow!(e.to_string()))?;

    if *running {
        bail!("Game already running");
    }

    let engine = GameEngine::from_config(config).context("could not set up the game")?;
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let handle = game_loop::spawn_game_loop(
        engine,
        CLOCK_PERIOD,
        snapshot_tx,
        state.latest_snapshot.clone(),
    )
    .context("could not spawn the game loop thread")?;

    *state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))? = Some(handle.command_tx);
    *state.loop_handle.lock().map_err(|e| anyhow!(e.to_string()))? = Some(handle.join);
    *running = true;

    Ok(snapshot_rx)
}

/// Send a player command to the game loop.
pub fn send_command(command: PlayerCommand, state: &AppState) -> anyhow::Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| anyhow!("Failed to send command: {}", e)),
        None => bail!("Game not started"),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> anyhow::Result<Option<GameStateSnapshot>> {
    let lock = state.latest_snapshot.lock().map_err(|e| anyhow!(e.to_string()))?;
    Ok(lock.clone())
}

/// Stop the clock, end the game loop thread, and wait for it.
pub fn shutdown(state: &AppState) -> anyhow::Result<()> {
    if let Some(tx) = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?.take() {
        // A send error means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(join) = state.loop_handle.lock().map_err(|e| anyhow!(e.to_string()))?.take() {
        join.join().map_err(|_| anyhow!("game loop thread panicked"))?;
    }
    *state.running.lock().map_err(|e| anyhow!(e.to_string()))? = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = send_command(PlayerCommand::Skip, &state).unwrap_err();
        assert!(err.to_string().contains("not started"));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_shutdown() {
        let state = AppState::new();
        let snapshots = start_game(&state, GameConfig::default()).unwrap();
        assert!(start_game(&state, GameConfig::default()).is_err());

        let first = snapshots.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.question_index, 0);

        send_command(PlayerCommand::Skip, &state).unwrap();
        let next = snapshots.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(next.question_index, 1);
        assert_eq!(get_snapshot(&state).unwrap().unwrap().question_index, 1);

        shutdown(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(send_command(PlayerCommand::Skip, &state).is_err());
    }

    #[test]
    fn test_start_with_bad_config_fails() {
        let state = AppState::new();
        let config = GameConfig {
            round_duration_secs: 0,
            ..Default::default()
        };
        assert!(start_game(&state, config).is_err());
        assert!(!*state.running.lock().unwrap());
    }
}
