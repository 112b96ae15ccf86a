//! User-facing announcements.
//!
//! Two messages ever leave the engine: the end-of-round summary and
//! the rejection of a mid-round difficulty change. How they surface
//! (dialog, toast, status line) is the host's business.

use tracing::info;

/// Sink for the engine's user-facing messages.
pub trait Notifier {
    /// A round just ended with the given final score; `high_score` is
    /// the best ever, already updated if this round beat it.
    fn announce_round_end(&mut self, final_score: u32, high_score: u32);

    /// A difficulty change was requested mid-round and refused.
    fn announce_rejected_difficulty_change(&mut self);
}

/// Discards every announcement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn announce_round_end(&mut self, _final_score: u32, _high_score: u32) {}

    fn announce_rejected_difficulty_change(&mut self) {}
}

/// Forwards announcements to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn announce_round_end(&mut self, final_score: u32, high_score: u32) {
        info!(final_score, high_score, "round over");
    }

    fn announce_rejected_difficulty_change(&mut self) {
        info!("difficulty change rejected while round is active");
    }
}
