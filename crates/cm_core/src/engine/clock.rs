//! Wall-clock-aware stopwatch for the period currently in progress.
//!
//! Elapsed time is computed on read from an accumulated duration plus an
//! optional running anchor; nothing ticks in the background and nothing is
//! persisted per tick. A periodic UI refresh may call [`PeriodClock::elapsed`]
//! as often as it likes without touching state.

use chrono::{DateTime, Utc};

use crate::models::Match;

/// Snapshot of the current period's stopwatch.
///
/// `accumulated_secs` is the time already banked into the period;
/// `anchor` is the wall-clock instant the clock last started, meaningful
/// only while `is_running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodClock {
    pub accumulated_secs: u32,
    pub is_running: bool,
    pub anchor: Option<DateTime<Utc>>,
}

impl PeriodClock {
    pub fn stopped(accumulated_secs: u32) -> Self {
        Self {
            accumulated_secs,
            is_running: false,
            anchor: None,
        }
    }

    /// Rebuild the clock from a persisted or live match. This is the
    /// crash-recovery path: a snapshot taken while running reconstructs the
    /// time that passed since `last_timestamp` on the next read.
    pub fn from_match(m: &Match) -> Option<Self> {
        let period = m.current_period()?;
        Some(Self {
            accumulated_secs: period.duration_secs,
            is_running: m.is_running,
            anchor: m.last_timestamp,
        })
    }

    /// Stopped → Running; a no-op when already running.
    pub fn start(self, now: DateTime<Utc>) -> Self {
        if self.is_running {
            return self;
        }
        Self {
            accumulated_secs: self.accumulated_secs,
            is_running: true,
            anchor: Some(now),
        }
    }

    /// Running → Stopped, banking the time since the anchor; a no-op when
    /// already stopped.
    pub fn pause(self, now: DateTime<Utc>) -> Self {
        if !self.is_running {
            return self;
        }
        Self {
            accumulated_secs: self.elapsed(now),
            is_running: false,
            anchor: None,
        }
    }

    /// Read-only elapsed seconds for this period.
    pub fn elapsed(&self, now: DateTime<Utc>) -> u32 {
        let running = match (self.is_running, self.anchor) {
            (true, Some(anchor)) => (now - anchor).num_seconds().max(0) as u32,
            _ => 0,
        };
        self.accumulated_secs.saturating_add(running)
    }
}

/// Elapsed seconds of the current period, or zero before the match starts.
pub fn elapsed_secs(m: &Match, now: DateTime<Utc>) -> u32 {
    PeriodClock::from_match(m).map_or(0, |clock| clock.elapsed(now))
}
