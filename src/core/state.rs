//! Round state.
//!
//! ## Invariants
//!
//! - At most one cell is lit at any time.
//! - `Idle` implies no timers are running and nothing is lit.
//! - `score` only increases, and only while the round is `Running`.
//! - `time_left_secs` never goes below zero.

use serde::{Deserialize, Serialize};

use super::cell::CellIndex;
use super::reward::ColorReward;

/// The two phases of the round lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in progress; difficulty may be changed.
    #[default]
    Idle,
    /// Countdown and light timers are live.
    Running,
}

/// The single cell currently eligible for scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitCell {
    /// Which cell is lit.
    pub cell: CellIndex,
    /// The reward scored by hitting it.
    pub reward: ColorReward,
}

/// Snapshot of one round's progress.
///
/// Created fresh on `start()`, reset to idle on `stop()` or timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current lifecycle phase.
    pub phase: RoundPhase,

    /// Points scored so far this round.
    pub score: u32,

    /// Whole seconds remaining before the round ends.
    pub time_left_secs: u32,

    /// The lit cell, if any.
    pub lit: Option<LitCell>,
}

impl RoundState {
    /// The idle state: nothing running, nothing lit, zero score.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// A fresh running state with the full countdown ahead of it.
    #[must_use]
    pub fn running(duration_secs: u32) -> Self {
        Self {
            phase: RoundPhase::Running,
            score: 0,
            time_left_secs: duration_secs,
            lit: None,
        }
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Running
    }
}
