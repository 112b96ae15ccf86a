//! Virtual-time round simulation.
//!
//! The headless counterpart of a browser event loop: `SimClock`
//! implements `Clock` over virtual milliseconds, and `Simulation`
//! pairs it with an engine, delivering each timer firing as the
//! matching engine event in wall-clock order.
//!
//! Two scheduling rules matter:
//!
//! - Same-deadline firings are delivered tick-first, so a countdown
//!   reaching zero always wins over a light event due at the same
//!   instant.
//! - Cancellation is synchronous: a timer cancelled while handling a
//!   firing (e.g. `stop()` inside a tick) is gone before the next
//!   due-timer lookup, so no stray firing can follow.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{Clock, TimerHandle, TimerKind};
use crate::engine::{RoundEngine, RoundEngineBuilder};

#[derive(Clone, Copy, Debug)]
struct SimTimer {
    handle: TimerHandle,
    kind: TimerKind,
    period_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Default)]
struct SimState {
    now_ms: u64,
    next_handle: u64,
    timers: Vec<SimTimer>,
}

/// Repeating timers over virtual milliseconds.
///
/// Cheap-clone shared handle: the engine holds one clone for
/// start/cancel, the driver holds another to ask what fires next.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    inner: Rc<RefCell<SimState>>,
}

impl SimClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Kinds of timers currently scheduled.
    #[must_use]
    pub fn scheduled_kinds(&self) -> Vec<TimerKind> {
        self.inner.borrow().timers.iter().map(|t| t.kind).collect()
    }

    /// Fire priority: ticks beat lights at the same deadline.
    fn kind_rank(kind: TimerKind) -> u8 {
        match kind {
            TimerKind::Tick => 0,
            TimerKind::Light => 1,
        }
    }

    /// Take the next firing due at or before `horizon_ms`, advancing
    /// virtual time to it and rescheduling the timer one period out.
    fn pop_next_due(&self, horizon_ms: u64) -> Option<TimerKind> {
        let mut state = self.inner.borrow_mut();

        let timer = state
            .timers
            .iter()
            .min_by_key(|t| (t.next_due_ms, Self::kind_rank(t.kind), t.handle.raw()))
            .copied()?;
        if timer.next_due_ms > horizon_ms {
            return None;
        }

        state.now_ms = timer.next_due_ms;
        if let Some(entry) = state
            .timers
            .iter_mut()
            .find(|t| t.handle == timer.handle)
        {
            entry.next_due_ms += entry.period_ms;
        }

        Some(timer.kind)
    }

    fn settle_at(&self, target_ms: u64) {
        let mut state = self.inner.borrow_mut();
        state.now_ms = state.now_ms.max(target_ms);
    }
}

impl Clock for SimClock {
    fn start_timer(&mut self, kind: TimerKind, period_ms: u64) -> TimerHandle {
        let mut state = self.inner.borrow_mut();
        let handle = TimerHandle(state.next_handle);
        state.next_handle += 1;
        let next_due_ms = state.now_ms + period_ms;
        state.timers.push(SimTimer {
            handle,
            kind,
            period_ms,
            next_due_ms,
        });
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .timers
            .retain(|timer| timer.handle != handle);
    }
}

/// An engine wired to a virtual clock.
pub struct Simulation {
    engine: RoundEngine,
    clock: SimClock,
}

impl Simulation {
    /// Wire the builder to a fresh virtual clock and build the
    /// engine. Any clock set on the builder earlier is replaced.
    #[must_use]
    pub fn new(builder: RoundEngineBuilder) -> Self {
        let clock = SimClock::new();
        let engine = builder.with_clock(clock.clone()).build();
        Self { engine, clock }
    }

    /// The simulated engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Mutable access for start/stop/select and difficulty changes.
    pub fn engine_mut(&mut self) -> &mut RoundEngine {
        &mut self.engine
    }

    /// The virtual clock.
    #[must_use]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Advance virtual time by `ms`, delivering every timer firing
    /// that comes due, in deadline order.
    pub fn advance(&mut self, ms: u64) {
        let target_ms = self.clock.now_ms() + ms;

        while let Some(kind) = self.clock.pop_next_due(target_ms) {
            match kind {
                TimerKind::Tick => self.engine.tick(),
                TimerKind::Light => self.engine.light_event(),
            }
        }

        self.clock.settle_at(target_ms);
    }
}
