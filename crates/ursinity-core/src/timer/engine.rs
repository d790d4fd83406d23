//! Fixed-duration timer.
//!
//! A [`Stopwatch`] paired with a target duration. It does not use internal
//! threads - the caller polls `is_elapsed()` or `check_and_reset()` from its
//! own update loop.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           ^  (restart from any state)
//! ```
//!
//! ## Usage
//!
//! ```
//! use ursinity_core::DurationTimer;
//!
//! let mut spawn = DurationTimer::new(1_000);
//! spawn.start();
//! // Once per frame:
//! if spawn.check_and_reset() {
//!     // fires roughly once a second
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::stopwatch::Stopwatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Not running and nothing accumulated.
    Idle,
    Running,
    /// Stopped with elapsed time retained.
    Paused,
}

/// Point-in-time view of a timer, for display or diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub elapsed_ms: u64,
    pub duration_ms: u64,
    pub remaining_ms: u64,
    /// 0.0 .. 1.0
    pub progress: f64,
    pub elapsed: bool,
    pub at: DateTime<Utc>,
}

/// Timer that reports when a fixed duration has passed.
///
/// Elapsed means strictly greater than the duration: a 1000 ms timer is not
/// elapsed at exactly 1000 ms. A zero-duration timer therefore becomes
/// elapsed as soon as a millisecond has passed, not at `start()`.
#[derive(Debug, Clone)]
pub struct DurationTimer<C: Clock = SystemClock> {
    stopwatch: Stopwatch<C>,
    duration_ms: u64,
}

impl DurationTimer<SystemClock> {
    pub fn new(duration_ms: u64) -> Self {
        Self::with_clock(duration_ms, SystemClock::new())
    }

    /// Millisecond precision; anything finer is truncated.
    pub fn from_duration(duration: Duration) -> Self {
        Self::new(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl<C: Clock> DurationTimer<C> {
    pub fn with_clock(duration_ms: u64, clock: C) -> Self {
        Self {
            stopwatch: Stopwatch::with_clock(clock),
            duration_ms,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_ms / 1000
    }

    pub fn is_started(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms())
    }

    /// 0.0 .. 1.0 progress towards the duration. Zero-duration timers jump
    /// from 0.0 to 1.0 when they become elapsed.
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return if self.is_elapsed() { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms() as f64 / self.duration_ms as f64).min(1.0)
    }

    pub fn state(&self) -> TimerState {
        if self.stopwatch.is_running() {
            TimerState::Running
        } else if self.stopwatch.elapsed() > Duration::ZERO {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.elapsed_ms() > self.duration_ms
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let elapsed_ms = self.elapsed_ms();
        TimerSnapshot {
            state: self.state(),
            elapsed_ms,
            duration_ms: self.duration_ms,
            remaining_ms: self.duration_ms.saturating_sub(elapsed_ms),
            progress: self.progress(),
            elapsed: elapsed_ms > self.duration_ms,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or resume accumulating. No-op while running.
    pub fn start(&mut self) {
        self.stopwatch.start();
        tracing::trace!(duration_ms = self.duration_ms, "timer started");
    }

    /// Pause accumulation, keeping the elapsed time.
    pub fn stop(&mut self) {
        self.stopwatch.stop();
        tracing::trace!(elapsed_ms = self.elapsed_ms(), "timer stopped");
    }

    /// Zero the elapsed time and run, whatever the previous state.
    pub fn restart(&mut self) {
        self.stopwatch.restart();
        tracing::trace!(duration_ms = self.duration_ms, "timer restarted");
    }

    /// Restart and return `true` if the duration has elapsed; otherwise
    /// return `false` and leave the timer untouched.
    pub fn check_and_reset(&mut self) -> bool {
        if !self.is_elapsed() {
            return false;
        }
        self.restart();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn timer(duration_ms: u64) -> (DurationTimer<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (DurationTimer::with_clock(duration_ms, clock.clone()), clock)
    }

    #[test]
    fn duration_secs_truncates() {
        assert_eq!(DurationTimer::new(1_999).duration_secs(), 1);
        assert_eq!(DurationTimer::new(999).duration_secs(), 0);
        assert_eq!(DurationTimer::new(25 * 60 * 1000).duration_secs(), 1500);
    }

    #[test]
    fn from_duration_uses_milliseconds() {
        let t = DurationTimer::from_duration(Duration::from_micros(2_500_900));
        assert_eq!(t.duration_ms(), 2_500);
    }

    #[test]
    fn start_stop_restart_states() {
        let (mut t, clock) = timer(1_000);
        assert_eq!(t.state(), TimerState::Idle);
        assert!(!t.is_started());

        t.start();
        assert_eq!(t.state(), TimerState::Running);
        assert!(t.is_started());

        clock.advance_ms(10);
        t.stop();
        assert_eq!(t.state(), TimerState::Paused);

        t.restart();
        assert_eq!(t.state(), TimerState::Running);
        assert_eq!(t.elapsed_ms(), 0);
    }

    #[test]
    fn not_elapsed_immediately_after_start() {
        let (mut t, _clock) = timer(1_000);
        t.start();
        assert!(!t.is_elapsed());
    }

    #[test]
    fn exactly_equal_is_not_elapsed() {
        let (mut t, clock) = timer(1_000);
        t.start();
        clock.advance_ms(1_000);
        assert!(!t.is_elapsed());
        clock.advance_ms(1);
        assert!(t.is_elapsed());
    }

    #[test]
    fn zero_duration_needs_time_to_pass() {
        let (mut t, clock) = timer(0);
        t.start();
        assert!(!t.is_elapsed());
        clock.advance_ms(1);
        assert!(t.is_elapsed());
    }

    #[test]
    fn paused_timer_does_not_elapse() {
        let (mut t, clock) = timer(100);
        t.start();
        clock.advance_ms(60);
        t.stop();
        clock.advance_ms(1_000);
        assert!(!t.is_elapsed());
        t.start();
        clock.advance_ms(41);
        assert!(t.is_elapsed());
    }

    #[test]
    fn check_and_reset_without_elapse_has_no_effect() {
        let (mut t, clock) = timer(1_000);
        t.start();
        clock.advance_ms(500);
        assert!(!t.check_and_reset());
        assert_eq!(t.elapsed_ms(), 500);
        assert!(t.is_started());
    }

    #[test]
    fn check_and_reset_on_idle_timer_stays_idle() {
        let (mut t, _clock) = timer(1_000);
        assert!(!t.check_and_reset());
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn check_and_reset_restarts_when_elapsed() {
        let (mut t, clock) = timer(1_000);
        t.start();
        clock.advance_ms(1_001);
        assert!(t.check_and_reset());
        assert!(!t.is_elapsed());
        assert_eq!(t.elapsed_ms(), 0);
        assert_eq!(t.state(), TimerState::Running);
    }

    #[test]
    fn check_and_reset_fires_on_paused_elapsed_timer() {
        let (mut t, clock) = timer(100);
        t.start();
        clock.advance_ms(150);
        t.stop();
        assert!(t.check_and_reset());
        assert!(t.is_started());
    }

    #[test]
    fn remaining_and_progress() {
        let (mut t, clock) = timer(1_000);
        assert_eq!(t.progress(), 0.0);
        t.start();
        clock.advance_ms(250);
        assert_eq!(t.remaining_ms(), 750);
        assert!((t.progress() - 0.25).abs() < 1e-9);
        clock.advance_ms(5_000);
        assert_eq!(t.remaining_ms(), 0);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn zero_duration_progress_follows_is_elapsed() {
        let (mut t, clock) = timer(0);
        assert_eq!(t.progress(), 0.0);
        t.start();
        assert!(!t.is_elapsed());
        assert_eq!(t.progress(), 0.0);

        t.stop();
        assert_eq!(t.progress(), 0.0);

        t.start();
        clock.advance_ms(1);
        assert!(t.is_elapsed());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn snapshot_reflects_timer() {
        let (mut t, clock) = timer(2_000);
        t.start();
        clock.advance_ms(500);
        let snap = t.snapshot();
        assert_eq!(snap.state, TimerState::Running);
        assert_eq!(snap.elapsed_ms, 500);
        assert_eq!(snap.duration_ms, 2_000);
        assert_eq!(snap.remaining_ms, 1_500);
        assert!(!snap.elapsed);
    }

    #[test]
    fn snapshot_serializes_state_lowercase() {
        let (t, _clock) = timer(10);
        let json = serde_json::to_value(t.snapshot()).unwrap();
        assert_eq!(json["state"], "idle");
        assert_eq!(json["duration_ms"], 10);
    }
}
