//! Game constants and tuning parameters.

use std::time::Duration;

/// Seconds a question stays active before the clock skips it.
pub const ROUND_DURATION_SECS: u32 = 10;

/// Number of cells on the board.
pub const GRID_SIZE: usize = 9;

/// Cells per row (the board is square).
pub const GRID_COLUMNS: usize = 3;

/// Interval between clock ticks.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Seed used for deck shuffling when none is configured.
pub const DEFAULT_SEED: u64 = 42;
