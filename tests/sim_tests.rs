//! Virtual-time integration tests.
//!
//! These drive full rounds through `Simulation`, checking the timer
//! contract from the outside: firing cadence, synchronous
//! cancellation, and the tick-first rule at equal deadlines.

use std::cell::RefCell;
use std::rc::Rc;

use flashgrid::{
    BoardRenderer, CellIndex, ColorId, Difficulty, DifficultyProfile, Notifier, RoundEngine,
    ScriptedRandom, Simulation,
};

/// Board that counts renderer calls.
#[derive(Clone, Default)]
struct CountingBoard {
    set_lit_calls: Rc<RefCell<u32>>,
    build_calls: Rc<RefCell<u32>>,
}

impl CountingBoard {
    fn set_lit_calls(&self) -> u32 {
        *self.set_lit_calls.borrow()
    }

    fn build_calls(&self) -> u32 {
        *self.build_calls.borrow()
    }
}

impl BoardRenderer for CountingBoard {
    fn build(&mut self, _grid_size: u8) {
        *self.build_calls.borrow_mut() += 1;
    }

    fn set_lit(&mut self, _cell: CellIndex, _color: ColorId, _points: u32) {
        *self.set_lit_calls.borrow_mut() += 1;
    }

    fn clear_lit(&mut self, _cell: CellIndex) {}

    fn clear_all_lit(&mut self) {}
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    round_ends: Rc<RefCell<Vec<(u32, u32)>>>,
}

impl RecordingNotifier {
    fn round_ends(&self) -> Vec<(u32, u32)> {
        self.round_ends.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn announce_round_end(&mut self, final_score: u32, high_score: u32) {
        self.round_ends.borrow_mut().push((final_score, high_score));
    }

    fn announce_rejected_difficulty_change(&mut self) {}
}

// =============================================================================
// Full-Round Simulations
// =============================================================================

/// A medium round times out after exactly its duration.
#[test]
fn test_medium_round_times_out_on_schedule() {
    let mut sim = Simulation::new(RoundEngine::builder().difficulty(Difficulty::Medium));

    sim.engine_mut().start();

    sim.advance(29_999);
    assert!(sim.engine().is_active());
    assert_eq!(sim.engine().time_left_secs(), 1);

    sim.advance(1);
    assert!(!sim.engine().is_active());
    assert_eq!(sim.now_ms(), 30_000);
}

/// Light cadence: a 30-second medium round lights cells 29 times -
/// the light due at the final instant loses to the ending tick.
#[test]
fn test_light_cadence_over_a_full_round() {
    let board = CountingBoard::default();
    let mut sim = Simulation::new(
        RoundEngine::builder()
            .difficulty(Difficulty::Medium)
            .with_board(board.clone()),
    );

    sim.engine_mut().start();
    sim.advance(60_000);

    assert!(!sim.engine().is_active());
    assert_eq!(board.set_lit_calls(), 29);
    // Built once at construction
    assert_eq!(board.build_calls(), 1);
}

/// A bot that hits every light: the final score is the sum of every
/// scripted reward, and the notification carries it.
#[test]
fn test_round_where_every_light_is_hit() {
    let notifier = RecordingNotifier::default();
    let mut sim = Simulation::new(
        RoundEngine::builder()
            .difficulty(DifficultyProfile::new(1000, 1000, 5, 3))
            .with_notifier(notifier.clone())
            // cells 0,1,2,3 with rewards red(10), green(20), blue(30), yellow(50)
            .with_random(ScriptedRandom::new([0, 0, 1, 1, 2, 2, 3, 3])),
    );

    sim.engine_mut().start();
    for cell in 0u16..4 {
        sim.advance(1000);
        sim.engine_mut().select(CellIndex::new(cell));
    }
    sim.advance(1000);

    assert!(!sim.engine().is_active());
    assert_eq!(notifier.round_ends(), vec![(110, 110)]);
}

// =============================================================================
// Cancellation
// =============================================================================

/// After a manual stop, advancing time delivers nothing.
#[test]
fn test_no_stray_firings_after_stop() {
    let board = CountingBoard::default();
    let mut sim = Simulation::new(
        RoundEngine::builder()
            .difficulty(Difficulty::Hard)
            .with_board(board.clone()),
    );

    sim.engine_mut().start();
    sim.advance(3000);
    let lights_so_far = board.set_lit_calls();
    assert!(lights_so_far > 0);

    sim.engine_mut().stop();
    sim.advance(60_000);

    assert_eq!(board.set_lit_calls(), lights_so_far);
    assert_eq!(sim.engine().time_left_secs(), 0);
}

/// A tick and a light due at the same instant: the tick ends the
/// round first and the light never fires.
#[test]
fn test_timeout_wins_the_final_instant() {
    let board = CountingBoard::default();
    let mut sim = Simulation::new(
        RoundEngine::builder()
            .difficulty(DifficultyProfile::new(1000, 1000, 3, 3))
            .with_board(board.clone()),
    );

    sim.engine_mut().start();
    sim.advance(10_000);

    // Lights at 1000 and 2000; the one due at 3000 is cancelled
    assert_eq!(board.set_lit_calls(), 2);
    assert!(!sim.engine().is_active());
}

/// Stopping and restarting within one advance window resumes the
/// cadence from the restart instant.
#[test]
fn test_restart_cadence() {
    let mut sim = Simulation::new(
        RoundEngine::builder().difficulty(DifficultyProfile::new(1000, 700, 10, 3)),
    );

    sim.engine_mut().start();
    sim.advance(1500);
    sim.engine_mut().stop();
    sim.advance(500); // now at t=2000, idle

    sim.engine_mut().start();
    assert_eq!(sim.engine().time_left_secs(), 10);

    // Next light is due 700ms after the restart, not on the old grid
    sim.advance(699);
    assert!(sim.engine().lit_cell().is_none());
    sim.advance(1);
    assert!(sim.engine().lit_cell().is_some());
}
