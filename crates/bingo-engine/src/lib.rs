//! Game engine for Football Bingo.
//!
//! Owns the question deck and game state, applies player commands and
//! clock ticks, and produces `GameStateSnapshot`s for the presentation layer.

pub mod config;
pub mod deck;
pub mod engine;
pub mod rules;

pub use bingo_core as core;
pub use config::GameConfig;
pub use deck::Deck;
pub use engine::GameEngine;
