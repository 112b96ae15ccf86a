//! Difficulty profiles: timing and grid parameters for a round.
//!
//! A profile bundles everything the engine needs to pace a round:
//! the countdown tick period, the light period, the round duration,
//! and the board edge length. Three named presets cover normal play;
//! custom profiles are accepted anywhere a preset is.

use serde::{Deserialize, Serialize};

/// Named difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Slow lights, long round, small board.
    Easy,
    #[default]
    Medium,
    /// Fast lights, short round, large board.
    Hard,
}

impl Difficulty {
    /// All presets, in ascending order of challenge.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The timing/grid parameters for this preset.
    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::new(1000, 1500, 40, 3),
            Difficulty::Medium => DifficultyProfile::new(1000, 1000, 30, 4),
            Difficulty::Hard => DifficultyProfile::new(1000, 700, 20, 5),
        }
    }

    /// Human-readable name (for debugging/display).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing and grid parameters for a round.
///
/// Immutable once a round starts; the engine rejects profile changes
/// while a round is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Countdown tick period in milliseconds.
    pub tick_interval_ms: u64,

    /// Period between light events in milliseconds.
    pub light_interval_ms: u64,

    /// Round length in seconds.
    pub duration_secs: u32,

    /// Board edge length. The board has `grid_size²` cells.
    pub grid_size: u8,
}

impl DifficultyProfile {
    /// Create a new profile.
    ///
    /// All intervals and the duration must be positive; the grid must
    /// have at least one cell.
    #[must_use]
    pub fn new(tick_interval_ms: u64, light_interval_ms: u64, duration_secs: u32, grid_size: u8) -> Self {
        assert!(tick_interval_ms > 0, "Tick interval must be positive");
        assert!(light_interval_ms > 0, "Light interval must be positive");
        assert!(duration_secs > 0, "Duration must be positive");
        assert!(grid_size >= 1, "Grid must have at least one cell");

        Self {
            tick_interval_ms,
            light_interval_ms,
            duration_secs,
            grid_size,
        }
    }

    /// Total number of addressable cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.grid_size) * usize::from(self.grid_size)
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.profile()
    }
}
