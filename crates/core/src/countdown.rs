//! Exam countdown bookkeeping, independent of any async runtime.
//!
//! The UI drives a `Countdown` with elapsed seconds; the countdown reports
//! `TimeUp` exactly once and ignores everything after it has expired or been
//! stopped.

use std::time::Duration;

/// Seconds remaining at or below which the UI should flag the timer.
pub const LOW_TIME_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Still counting down.
    Running { remaining_secs: u64 },
    /// The duration has just been reached. Emitted once.
    TimeUp,
    /// Already expired or stopped; nothing changed.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownState {
    Running,
    Stopped,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u64,
    elapsed_secs: u64,
    state: CountdownState,
}

impl Countdown {
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes) * 60))
    }

    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            total_secs: total.as_secs(),
            elapsed_secs: 0,
            state: CountdownState::Running,
        }
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> CountdownEvent {
        self.advance(1)
    }

    /// Advance by `secs` seconds.
    pub fn advance(&mut self, secs: u64) -> CountdownEvent {
        self.sync_elapsed(self.elapsed_secs.saturating_add(secs))
    }

    /// Move to an absolute elapsed time. Elapsed time never goes backwards.
    pub fn sync_elapsed(&mut self, elapsed_secs: u64) -> CountdownEvent {
        if self.state != CountdownState::Running {
            return CountdownEvent::Idle;
        }
        self.elapsed_secs = self.elapsed_secs.max(elapsed_secs).min(self.total_secs);
        if self.elapsed_secs >= self.total_secs {
            self.state = CountdownState::Expired;
            return CountdownEvent::TimeUp;
        }
        CountdownEvent::Running {
            remaining_secs: self.remaining_secs(),
        }
    }

    /// Stop counting without signalling time-up.
    pub fn stop(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Stopped;
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.total_secs.saturating_sub(self.elapsed_secs)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state == CountdownState::Expired
    }

    #[must_use]
    pub fn is_low(&self) -> bool {
        self.is_running() && self.remaining_secs() <= LOW_TIME_SECS
    }

    /// Remaining time as `MM:SS`; minutes are not wrapped into hours.
    #[must_use]
    pub fn display(&self) -> String {
        let remaining = self.remaining_secs();
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }
}
