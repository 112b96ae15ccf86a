//! Core engine types: cells, difficulty, rewards, round state, RNG.
//!
//! This module contains the value types the rest of the crate builds on.
//! Nothing here performs side effects; collaborator seams live in their
//! own modules.

pub mod cell;
pub mod difficulty;
pub mod reward;
pub mod rng;
pub mod state;

pub use cell::CellIndex;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use reward::{ColorId, ColorReward, RewardTable};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use state::{LitCell, RoundPhase, RoundState};
