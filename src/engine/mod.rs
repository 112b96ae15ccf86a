//! Round lifecycle engine.
//!
//! `RoundEngine` is the one component with real logic: a two-phase
//! state machine (Idle, Running) driven by four externally-delivered
//! events.
//!
//! - `start()` arms the countdown and light timers and resets state.
//! - `tick()` burns one second; at zero the round ends.
//! - `light_event()` moves the single lit cell to a random location
//!   with a random reward.
//! - `select(cell)` scores iff the chosen cell is the lit one.
//!
//! Every side effect goes through an injected collaborator, held as
//! `Box<dyn Trait>` with a working default, so a full round can run
//! headless and deterministic. All methods take `&mut self`;
//! exclusive ownership is the serialization mechanism, there is no
//! locking.

use tracing::{debug, info, warn};

use crate::audio::{Mixer, NullMixer};
use crate::board::{BoardRenderer, GridModel};
use crate::clock::{Clock, ManualClock, TimerHandle, TimerKind};
use crate::core::{
    CellIndex, DifficultyProfile, GameRng, LitCell, RandomSource, RewardTable, RoundState,
};
use crate::notify::{Notifier, NullNotifier};
use crate::store::{MemoryScoreStore, ScoreStore};

/// The round lifecycle state machine.
///
/// Owns game state, timer handles, and scoring. See the module docs
/// for the event model.
pub struct RoundEngine {
    profile: DifficultyProfile,
    rewards: RewardTable,
    state: RoundState,
    high_score: u32,
    sound_enabled: bool,

    tick_timer: Option<TimerHandle>,
    light_timer: Option<TimerHandle>,

    board: Box<dyn BoardRenderer>,
    clock: Box<dyn Clock>,
    store: Box<dyn ScoreStore>,
    notifier: Box<dyn Notifier>,
    mixer: Box<dyn Mixer>,
    rng: Box<dyn RandomSource>,
}

impl RoundEngine {
    /// Start building an engine with default collaborators.
    #[must_use]
    pub fn builder() -> RoundEngineBuilder {
        RoundEngineBuilder::new()
    }

    // === Transitions ===

    /// Begin a round. No-op if one is already running.
    pub fn start(&mut self) {
        if self.state.is_active() {
            return;
        }

        self.state = RoundState::running(self.profile.duration_secs);
        self.board.clear_all_lit();

        self.tick_timer = Some(
            self.clock
                .start_timer(TimerKind::Tick, self.profile.tick_interval_ms),
        );
        self.light_timer = Some(
            self.clock
                .start_timer(TimerKind::Light, self.profile.light_interval_ms),
        );

        info!(
            duration_secs = self.profile.duration_secs,
            grid_size = self.profile.grid_size,
            "round started"
        );
    }

    /// End the round early. No-op while idle.
    pub fn stop(&mut self) {
        if !self.state.is_active() {
            return;
        }
        self.finish_round();
    }

    /// Burn one second of the countdown. Ends the round when the
    /// counter reaches zero. No-op while idle, so a tick delivered
    /// after cancellation cannot restart end-of-round processing.
    pub fn tick(&mut self) {
        if !self.state.is_active() {
            return;
        }

        self.state.time_left_secs = self.state.time_left_secs.saturating_sub(1);
        if self.state.time_left_secs == 0 {
            self.finish_round();
        }
    }

    /// Move the lit cell: clear the previous one, pick a cell and a
    /// reward uniformly at random, light it. Pure selection; score
    /// and countdown are untouched. No-op while idle.
    pub fn light_event(&mut self) {
        if !self.state.is_active() {
            return;
        }

        if let Some(previous) = self.state.lit.take() {
            self.board.clear_lit(previous.cell);
        }

        let cell = CellIndex::new(self.rng.pick(self.profile.cell_count()) as u16);
        let reward = self.rewards.pick(&mut *self.rng);

        self.board.set_lit(cell, reward.color, reward.points);
        self.state.lit = Some(LitCell { cell, reward });

        debug!(%cell, color = %reward.color, points = reward.points, "cell lit");
    }

    /// Player hit a cell. Scores the lit reward iff the round is
    /// running and `cell` is the lit cell; anything else - a stale
    /// index, an unlit cell, a repeat on an already-cleared cell -
    /// is silently ignored.
    pub fn select(&mut self, cell: CellIndex) {
        if !self.state.is_active() {
            return;
        }
        let Some(lit) = self.state.lit else {
            return;
        };
        if lit.cell != cell {
            return;
        }

        self.state.lit = None;
        self.board.clear_lit(cell);
        self.state.score += lit.reward.points;
        if self.sound_enabled {
            self.mixer.play_color(lit.reward.color);
        }

        debug!(%cell, points = lit.reward.points, score = self.state.score, "cell hit");
    }

    /// Swap the difficulty profile and rebuild the board to its grid
    /// size. Allowed only while idle; a mid-round request leaves all
    /// state untouched, notifies the user, and returns `false`.
    pub fn change_difficulty(&mut self, profile: impl Into<DifficultyProfile>) -> bool {
        if self.state.is_active() {
            self.notifier.announce_rejected_difficulty_change();
            return false;
        }

        self.profile = profile.into();
        self.board.build(self.profile.grid_size);
        true
    }

    /// Flip the mute flag; returns the new enabled state.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    // === Accessors ===

    /// Whether a round is in progress. Hosts use this to disable the
    /// difficulty selector and swap start/stop controls.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Points scored in the current round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Whole seconds left in the current round.
    #[must_use]
    pub fn time_left_secs(&self) -> u32 {
        self.state.time_left_secs
    }

    /// Best score ever achieved, including the current session.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The active difficulty profile.
    #[must_use]
    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    /// The currently lit cell, if any.
    #[must_use]
    pub fn lit_cell(&self) -> Option<LitCell> {
        self.state.lit
    }

    /// Whether sound cues are enabled.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Snapshot of the full round state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    // === Internals ===

    /// Shared end-of-round path for manual stop and timeout: cancel
    /// both timers synchronously, clear the board, persist the high
    /// score if beaten, announce, and return to idle.
    fn finish_round(&mut self) {
        let final_score = self.state.score;

        if let Some(handle) = self.tick_timer.take() {
            self.clock.cancel_timer(handle);
        }
        if let Some(handle) = self.light_timer.take() {
            self.clock.cancel_timer(handle);
        }

        self.state = RoundState::idle();
        self.board.clear_all_lit();

        if final_score > self.high_score {
            self.high_score = final_score;
            if let Err(error) = self.store.set(self.high_score) {
                // Keep the in-memory value for the session.
                warn!(%error, "failed to persist high score");
            }
        }

        if self.sound_enabled {
            self.mixer.play_game_over();
        }

        info!(final_score, high_score = self.high_score, "round over");
        self.notifier.announce_round_end(final_score, self.high_score);
    }
}

/// Builder for `RoundEngine`.
///
/// Every collaborator has a working default (headless board, manual
/// clock, in-memory store, silent notifier and mixer, seeded RNG), so
/// `RoundEngine::builder().build()` yields a fully functional engine.
pub struct RoundEngineBuilder {
    profile: DifficultyProfile,
    rewards: RewardTable,
    seed: u64,
    sound_enabled: bool,
    board: Box<dyn BoardRenderer>,
    clock: Box<dyn Clock>,
    store: Box<dyn ScoreStore>,
    notifier: Box<dyn Notifier>,
    mixer: Box<dyn Mixer>,
    rng: Option<Box<dyn RandomSource>>,
}

impl Default for RoundEngineBuilder {
    fn default() -> Self {
        Self {
            profile: crate::core::Difficulty::Medium.profile(),
            rewards: RewardTable::standard(),
            seed: 0,
            sound_enabled: true,
            board: Box::new(GridModel::new()),
            clock: Box::new(ManualClock::new()),
            store: Box::new(MemoryScoreStore::new()),
            notifier: Box::new(NullNotifier),
            mixer: Box::new(NullMixer),
            rng: None,
        }
    }
}

impl RoundEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting difficulty (preset or custom profile).
    #[must_use]
    pub fn difficulty(mut self, profile: impl Into<DifficultyProfile>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the reward table.
    #[must_use]
    pub fn rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Seed for the default RNG. Ignored when a custom random source
    /// is injected.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start with sound cues muted.
    #[must_use]
    pub fn muted(mut self) -> Self {
        self.sound_enabled = false;
        self
    }

    /// Set a custom board renderer.
    #[must_use]
    pub fn with_board<B: BoardRenderer + 'static>(mut self, board: B) -> Self {
        self.board = Box::new(board);
        self
    }

    /// Set a custom clock.
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set a custom score store.
    #[must_use]
    pub fn with_store<S: ScoreStore + 'static>(mut self, store: S) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Set a custom notifier.
    #[must_use]
    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Set a custom mixer.
    #[must_use]
    pub fn with_mixer<M: Mixer + 'static>(mut self, mixer: M) -> Self {
        self.mixer = Box::new(mixer);
        self
    }

    /// Set a custom random source.
    #[must_use]
    pub fn with_random<R: RandomSource + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the engine: load the persisted high score (falling back
    /// to 0 when the store is unavailable) and lay out the board.
    #[must_use]
    pub fn build(self) -> RoundEngine {
        let mut board = self.board;
        board.build(self.profile.grid_size);

        let high_score = match self.store.get() {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "high score unavailable, starting at 0");
                0
            }
        };

        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(GameRng::new(self.seed)));

        RoundEngine {
            profile: self.profile,
            rewards: self.rewards,
            state: RoundState::idle(),
            high_score,
            sound_enabled: self.sound_enabled,
            tick_timer: None,
            light_timer: None,
            board,
            clock: self.clock,
            store: self.store,
            notifier: self.notifier,
            mixer: self.mixer,
            rng,
        }
    }
}
