//! Structural mapping from absolute match time to period index.
//!
//! Cumulative period durations form half-open `[start, end)` windows over
//! the match timeline. Intervals occupy real time in that timeline but never
//! own events: a time landing inside an interval window is pushed forward to
//! the next playing period. The mapping is recomputed from the period list on
//! demand, never stored, so retrospective period edits are reflected
//! automatically wherever no explicit stamp exists.

use crate::models::{MatchEvent, Period, Substitution};

/// Cumulative `[start, end)` second windows, one per period.
pub fn period_windows(periods: &[Period]) -> Vec<(u32, u32)> {
    let mut windows = Vec::with_capacity(periods.len());
    let mut start = 0u32;
    for period in periods {
        let end = start.saturating_add(period.duration_secs);
        windows.push((start, end));
        start = end;
    }
    windows
}

/// Map absolute time `t` (seconds) to the index of a playing period.
///
/// Returns `None` only when the sequence contains no non-interval period.
/// Times inside an interval window resolve to the next playing period;
/// times past the end of the timeline resolve to the last playing period.
pub fn map_to_period(periods: &[Period], t: u32) -> Option<usize> {
    let last_playing = periods
        .iter()
        .rposition(|p| !p.period_type.is_interval())?;

    let windows = period_windows(periods);
    let containing = windows
        .iter()
        .position(|&(start, end)| start <= t && t < end);

    match containing {
        Some(idx) if !periods[idx].period_type.is_interval() => Some(idx),
        Some(idx) => periods[idx + 1..]
            .iter()
            .position(|p| !p.period_type.is_interval())
            .map(|offset| idx + 1 + offset)
            .or(Some(last_playing)),
        // Past the end of recorded periods, e.g. a manually edited timestamp.
        None => Some(last_playing),
    }
}

/// Period index for an event: the stamp captured at creation wins when it
/// still points at a playing period, otherwise the structural mapping.
pub fn period_for_event(periods: &[Period], event: &MatchEvent) -> Option<usize> {
    resolve(periods, event.period_index, event.absolute_secs())
}

/// Period index for a substitution, same policy as events.
pub fn period_for_substitution(periods: &[Period], sub: &Substitution) -> Option<usize> {
    resolve(periods, sub.period_index, sub.absolute_secs())
}

fn resolve(periods: &[Period], stamp: Option<usize>, t: u32) -> Option<usize> {
    if let Some(idx) = stamp {
        if periods
            .get(idx)
            .is_some_and(|p| !p.period_type.is_interval())
        {
            return Some(idx);
        }
    }
    map_to_period(periods, t)
}
