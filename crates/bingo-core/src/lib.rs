//! Core types and definitions for Football Bingo.
//!
//! This crate defines the vocabulary shared across all other crates:
//! questions, commands, events, game state, snapshots, and constants.
//! It has no dependency on any clock, thread, or presentation layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{BingoError, BingoResult};
