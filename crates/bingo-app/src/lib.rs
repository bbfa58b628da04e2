//! Football Bingo host application.
//!
//! Runs the engine on its own thread behind a one-second clock and
//! exposes it to a front-end through commands and snapshot channels.

pub mod game_loop;
pub mod ipc;
pub mod logging;
pub mod state;
pub mod terminal;

pub use bingo_core as core;
