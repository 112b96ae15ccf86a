//! # flashgrid
//!
//! A reaction-timing grid game engine: one cell of an N×N board
//! lights up at a difficulty-dependent interval, hitting it before it
//! moves scores color-dependent points, and a one-second countdown
//! ends the round.
//!
//! ## Design Principles
//!
//! 1. **Headless Core**: The engine owns state, timers, and scoring,
//!    and never touches presentation. Rendering, audio, timer
//!    dispatch, and persistence are collaborators behind narrow
//!    traits.
//!
//! 2. **Injected Collaborators**: Every seam has a working default
//!    and a builder override, so multiple independent engines can run
//!    side by side and tests can observe every side effect.
//!
//! 3. **Deterministic Play**: Randomness goes through `RandomSource`;
//!    a seed replays a round, a scripted source makes test outcomes
//!    exact rather than statistical.
//!
//! ## Concurrency Model
//!
//! Single-threaded cooperative: the host delivers timer and input
//! events as `&mut` method calls on one engine, so mutations are
//! serialized by ownership and no locking exists anywhere.
//!
//! ## Modules
//!
//! - `core`: cells, difficulty profiles, color rewards, round state, RNG
//! - `board`: board rendering seam and the headless `GridModel`
//! - `clock`: timer scheduling seam
//! - `store`: high-score persistence seam
//! - `notify`: user-facing announcements
//! - `audio`: sound cue seam
//! - `engine`: the round lifecycle state machine
//! - `sim`: virtual-time simulation for headless play and tests

pub mod audio;
pub mod board;
pub mod clock;
pub mod core;
pub mod engine;
pub mod notify;
pub mod sim;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    CellIndex, ColorId, ColorReward, Difficulty, DifficultyProfile, GameRng, LitCell,
    RandomSource, RewardTable, RoundPhase, RoundState, ScriptedRandom,
};

pub use crate::board::{BoardRenderer, GridModel};
pub use crate::clock::{Clock, ManualClock, TimerHandle, TimerKind, TimerRecord};
pub use crate::engine::{RoundEngine, RoundEngineBuilder};
pub use crate::notify::{LogNotifier, Notifier, NullNotifier};
pub use crate::audio::{Mixer, NullMixer};
pub use crate::sim::{SimClock, Simulation};
pub use crate::store::{JsonScoreStore, MemoryScoreStore, ScoreStore, StoreError};
