//! Start/stop elapsed-time accumulator.
//!
//! Elapsed time is only accumulated between `start` and `stop`. Starting an
//! already running stopwatch is a no-op, so is stopping a stopped one.

use std::time::Duration;

use super::clock::{Clock, SystemClock};

#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    /// Time accumulated by completed start/stop intervals.
    accumulated: Duration,
    /// Clock reading when the current interval began, if running.
    started_at: Option<Duration>,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }

    /// Create a stopwatch that is already running.
    pub fn start_new() -> Self {
        let mut sw = Self::new();
        sw.start();
        sw
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(start) => self
                .accumulated
                .saturating_add(self.clock.now().saturating_sub(start)),
            None => self.accumulated,
        }
    }

    /// Whole milliseconds elapsed, truncated.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
        }
    }

    pub fn stop(&mut self) {
        if let Some(start) = self.started_at.take() {
            self.accumulated = self
                .accumulated
                .saturating_add(self.clock.now().saturating_sub(start));
        }
    }

    /// Stop and zero the elapsed time.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    /// Zero the elapsed time and start again.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
