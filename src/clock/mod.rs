//! Timer scheduling seam.
//!
//! The engine expresses timer intent through `Clock`: start a
//! repeating timer, cancel it by handle. The host owns the actual
//! event loop and calls back into the engine (`tick()` /
//! `light_event()`) whenever a timer it scheduled fires. After
//! `cancel_timer` returns, the host must deliver no further firings
//! for that handle; the engine's phase guards additionally turn any
//! stale delivery into a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// The two repeating timers a round runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// One-second countdown tick.
    Tick,
    /// Difficulty-dependent light event.
    Light,
}

impl std::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerKind::Tick => f.write_str("tick"),
            TimerKind::Light => f.write_str("light"),
        }
    }
}

/// Opaque handle to a started timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Scheduler of the round's repeating timers.
pub trait Clock {
    /// Start a repeating timer firing every `period_ms` milliseconds.
    fn start_timer(&mut self, kind: TimerKind, period_ms: u64) -> TimerHandle;

    /// Cancel a timer. Unknown handles are ignored.
    fn cancel_timer(&mut self, handle: TimerHandle);
}

/// One timer registration as seen by `ManualClock`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRecord {
    pub handle: TimerHandle,
    pub kind: TimerKind,
    pub period_ms: u64,
    /// False once the timer has been cancelled.
    pub active: bool,
}

#[derive(Debug, Default)]
struct ManualState {
    next_handle: u64,
    timers: Vec<TimerRecord>,
}

/// Clock that records intent without scheduling anything.
///
/// Tests and host shells that drive the engine directly use this to
/// observe which timers the engine believes are running. Cheap-clone
/// shared handle, single-threaded.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ManualState>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registration ever made, in order.
    #[must_use]
    pub fn records(&self) -> Vec<TimerRecord> {
        self.inner.borrow().timers.clone()
    }

    /// Currently active timers.
    #[must_use]
    pub fn active_timers(&self) -> Vec<TimerRecord> {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|record| record.active)
            .copied()
            .collect()
    }

    /// Whether a timer of the given kind is currently active.
    #[must_use]
    pub fn is_running(&self, kind: TimerKind) -> bool {
        self.active_timers().iter().any(|record| record.kind == kind)
    }
}

impl Clock for ManualClock {
    fn start_timer(&mut self, kind: TimerKind, period_ms: u64) -> TimerHandle {
        let mut state = self.inner.borrow_mut();
        let handle = TimerHandle(state.next_handle);
        state.next_handle += 1;
        state.timers.push(TimerRecord {
            handle,
            kind,
            period_ms,
            active: true,
        });
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        let mut state = self.inner.borrow_mut();
        if let Some(record) = state.timers.iter_mut().find(|record| record.handle == handle) {
            record.active = false;
        }
    }
}
