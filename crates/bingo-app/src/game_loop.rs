//! Game loop thread: owns the engine, applies commands, and runs the clock.
//!
//! Commands arrive via `mpsc` channel and are applied in arrival order.
//! Between commands the thread waits for the next clock deadline and calls
//! `tick`. The clock restarts whenever the question changes and stops once
//! the game is over; from then on the thread only waits for commands.
//! Every transition publishes a snapshot to the snapshot channel and to the
//! shared latest-snapshot slot.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use bingo_core::state::GameStateSnapshot;
use bingo_engine::GameEngine;

use crate::state::GameLoopCommand;

/// Handles returned by `spawn_game_loop`.
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub join: JoinHandle<()>,
}

/// Spawns the game loop in a new thread.
///
/// `clock_period` is one second in production; tests shorten it.
pub fn spawn_game_loop(
    engine: GameEngine,
    clock_period: Duration,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<GameLoopHandle> {
    let (command_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let join = std::thread::Builder::new()
        .name("bingo-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, clock_period, cmd_rx, &snapshot_tx, &latest_snapshot);
        })?;

    Ok(GameLoopHandle { command_tx, join })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    clock_period: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: &mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    publish(&mut engine, snapshot_tx, latest_snapshot);
    let mut next_tick_time = Instant::now() + clock_period;

    loop {
        // 1. Wait for a command, or for the clock while the game is live
        let received = if engine.is_over() {
            match cmd_rx.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        } else {
            let timeout = next_tick_time.saturating_duration_since(Instant::now());
            match cmd_rx.recv_timeout(timeout) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        };

        // 2. Apply it
        match received {
            Some(GameLoopCommand::Shutdown) => break,
            Some(GameLoopCommand::PlayerCommand(cmd)) => {
                let question = engine.state().current_question_index();
                let game = engine.games_started();
                debug!(?cmd, "player command");
                engine.apply(cmd);
                if engine.state().current_question_index() != question
                    || engine.games_started() != game
                {
                    next_tick_time = Instant::now() + clock_period;
                }
            }
            None => {
                engine.tick();
                next_tick_time += clock_period;
                let now = Instant::now();
                if now > next_tick_time + clock_period * 2 {
                    // Too far behind, drop the missed ticks
                    next_tick_time = now + clock_period;
                }
            }
        }

        // 3. Publish the result
        publish(&mut engine, snapshot_tx, latest_snapshot);
    }

    info!("game loop stopped");
}

fn publish(
    engine: &mut GameEngine,
    snapshot_tx: &mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let snapshot = engine.snapshot();
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot.clone());
    }
    // Nobody listening is fine; the latest slot still has it.
    let _ = snapshot_tx.send(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::commands::PlayerCommand;
    use bingo_core::enums::GamePhase;
    use bingo_core::events::GameEvent;
    use bingo_engine::{Deck, GameConfig};

    const FAST_CLOCK: Duration = Duration::from_millis(5);
    const WAIT: Duration = Duration::from_secs(5);

    fn spawn(
        config: GameConfig,
        clock: Duration,
    ) -> (
        GameLoopHandle,
        mpsc::Receiver<GameStateSnapshot>,
        Arc<Mutex<Option<GameStateSnapshot>>>,
    ) {
        let engine = GameEngine::new(config, Deck::sample()).unwrap();
        let (snap_tx, snap_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(engine, clock, snap_tx, latest.clone()).unwrap();
        (handle, snap_rx, latest)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SelectCell {
            index: 3,
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Skip))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::SelectCell { index: 3 })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Skip)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_initial_snapshot_published() {
        let (handle, snap_rx, latest) = spawn(GameConfig::default(), Duration::from_secs(60));
        let first = snap_rx.recv_timeout(WAIT).unwrap();
        assert_eq!(first.phase, GamePhase::Playing);
        assert_eq!(first.seconds_remaining, 10);
        assert!(latest.lock().unwrap().is_some());

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join.join().unwrap();
    }

    #[test]
    fn test_commands_applied_in_order() {
        let (handle, snap_rx, _latest) = spawn(GameConfig::default(), Duration::from_secs(60));
        snap_rx.recv_timeout(WAIT).unwrap();

        for cmd in [
            PlayerCommand::SelectCell { index: 0 },
            PlayerCommand::SelectCell { index: 0 },
            PlayerCommand::Skip,
            PlayerCommand::SelectCell { index: 2 },
        ] {
            handle
                .command_tx
                .send(GameLoopCommand::PlayerCommand(cmd))
                .unwrap();
        }

        let snaps: Vec<_> = (0..4).map(|_| snap_rx.recv_timeout(WAIT).unwrap()).collect();
        assert_eq!(snaps[0].events, vec![GameEvent::Correct { cell: 0 }]);
        assert!(snaps[1].events.is_empty(), "answered cell ignored");
        assert_eq!(snaps[2].question_index, 2);
        assert_eq!(snaps[3].events, vec![GameEvent::Correct { cell: 2 }]);
        assert_eq!(snaps[3].correct_count, 2);

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join.join().unwrap();
    }

    #[test]
    fn test_clock_runs_game_to_completion_then_stops() {
        let config = GameConfig {
            round_duration_secs: 1,
            ..Default::default()
        };
        let (handle, snap_rx, latest) = spawn(config, FAST_CLOCK);

        let mut game_over = None;
        while game_over.is_none() {
            let snap = snap_rx.recv_timeout(WAIT).unwrap();
            game_over = snap
                .events
                .iter()
                .find(|e| matches!(e, GameEvent::GameOver { .. }))
                .copied();
        }
        assert_eq!(
            game_over,
            Some(GameEvent::GameOver {
                correct_count: 0,
                total: 9
            })
        );

        // Clock is stopped: no further snapshots without a command.
        assert!(snap_rx.recv_timeout(FAST_CLOCK * 20).is_err());
        assert!(latest.lock().unwrap().as_ref().unwrap().is_over());

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join.join().unwrap();
    }

    #[test]
    fn test_new_game_restarts_clock() {
        let config = GameConfig {
            round_duration_secs: 1,
            ..Default::default()
        };
        let (handle, snap_rx, _latest) = spawn(config, FAST_CLOCK);

        loop {
            if snap_rx.recv_timeout(WAIT).unwrap().is_over() {
                break;
            }
        }

        handle
            .command_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::NewGame))
            .unwrap();
        let fresh = snap_rx.recv_timeout(WAIT).unwrap();
        assert_eq!(fresh.phase, GamePhase::Playing);
        assert_eq!(fresh.question_index, 0);

        // The clock is ticking again.
        let next = snap_rx.recv_timeout(WAIT).unwrap();
        assert_eq!(next.question_index, 1);

        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join.join().unwrap();
    }

    #[test]
    fn test_loop_exits_on_disconnect() {
        let (handle, snap_rx, _latest) = spawn(GameConfig::default(), Duration::from_secs(60));
        snap_rx.recv_timeout(WAIT).unwrap();
        drop(handle.command_tx);
        handle.join.join().unwrap();
    }
}
