//! Period sequence transitions: starting the match, appending periods and
//! intervals, removing the last period, finishing and re-opening.
//!
//! All functions are pure `(state, args) -> Result<state>`: they validate
//! fully, then return a new `Match`. The current period is always the last
//! element of `periods`; superseded periods are frozen.

use chrono::{DateTime, Utc};
use log::debug;

use crate::engine::clock::PeriodClock;
use crate::error::{EngineError, Result};
use crate::models::{Match, Period, PeriodType};

/// Start or resume the clock. Before the first start this creates period 0
/// (regular time) so a pre-start match transitions into a started one.
pub fn start_clock(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    let mut next = m.clone();
    if !next.has_started() {
        let label = Period::default_label(PeriodType::Regular, 1);
        debug!("starting match, creating {label}");
        next.periods.push(Period::new(PeriodType::Regular, label));
    } else if next.is_running {
        // Stopped→Running only: re-anchoring here would discard the time
        // accrued since the original anchor.
        return Ok(next);
    }
    next.is_running = true;
    next.last_timestamp = Some(now);
    Ok(next)
}

/// Pause the clock, banking the time since the anchor into the current
/// period. Pausing an already stopped clock is a no-op.
pub fn pause_clock(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    let mut next = m.clone();
    bank_running_time(&mut next, now);
    next.last_timestamp = Some(now);
    Ok(next)
}

/// Append a new period of `kind`: the superseded period banks its running
/// time and freezes, the new period becomes current with its clock at zero
/// and stopped.
pub fn add_period(m: &Match, kind: PeriodType, now: DateTime<Utc>) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    let mut next = m.clone();
    bank_running_time(&mut next, now);
    if let Some(current) = next.current_period_mut() {
        current.is_finished = true;
    }
    let label = Period::default_label(kind, next.period_count_of(kind) + 1);
    debug!("appending period {label:?} as index {}", next.periods.len());
    next.periods.push(Period::new(kind, label));
    next.last_timestamp = Some(now);
    Ok(next)
}

/// Begin an interval (e.g. half-time). The interval consumes real time only
/// while its clock runs; the operator starts it when the break begins.
pub fn start_interval(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    add_period(m, PeriodType::Interval, now)
}

/// Drop the last period and reinstate the one before it as current. Its
/// banked duration is kept and its clock stays stopped. Events already
/// stamped with the removed index keep their stamp; reports resolve them
/// structurally (see `period_map`).
pub fn remove_last_period(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    if m.periods.len() <= 1 {
        return Err(EngineError::InvalidPeriodRemoval);
    }
    let mut next = m.clone();
    bank_running_time(&mut next, now);
    let removed = next.periods.pop();
    debug!("removed period {:?}", removed.map(|p| p.label));
    if let Some(current) = next.current_period_mut() {
        current.is_finished = false;
    }
    next.last_timestamp = Some(now);
    Ok(next)
}

/// Freeze the whole match: bank the clock, close the current period and mark
/// the match finished. Only `continue_last_period` can undo this.
pub fn finish(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    let mut next = m.clone();
    bank_running_time(&mut next, now);
    if let Some(current) = next.current_period_mut() {
        current.is_finished = true;
    }
    next.is_finished = true;
    next.last_timestamp = Some(now);
    Ok(next)
}

/// Recovery action: re-open the final period of a finished match and restart
/// its clock. Permitted only when that period is regular time; extra time and
/// intervals stay closed once the match is finished.
pub fn continue_last_period(m: &Match, now: DateTime<Utc>) -> Result<Match> {
    if !m.is_finished {
        return Ok(m.clone());
    }
    let last = m.current_period().ok_or(EngineError::NoActivePeriod)?;
    if last.period_type != PeriodType::Regular {
        return Err(EngineError::MatchFinished);
    }
    let mut next = m.clone();
    next.is_finished = false;
    if let Some(current) = next.current_period_mut() {
        current.is_finished = false;
    }
    next.is_running = true;
    next.last_timestamp = Some(now);
    debug!("continued last regular period");
    Ok(next)
}

/// Fold any running wall-clock time into the current period and stop the
/// clock. No-op when the clock is stopped or the match has no periods.
fn bank_running_time(m: &mut Match, now: DateTime<Utc>) {
    if let Some(clock) = PeriodClock::from_match(m) {
        let paused = clock.pause(now);
        if let Some(current) = m.current_period_mut() {
            current.duration_secs = paused.accumulated_secs;
        }
    }
    m.is_running = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
    }

    fn started() -> Match {
        start_clock(&Match::default(), t0()).unwrap()
    }

    #[test]
    fn test_start_creates_period_zero() {
        let m = started();
        assert_eq!(m.periods.len(), 1);
        assert_eq!(m.periods[0].period_type, PeriodType::Regular);
        assert_eq!(m.periods[0].label, "Period 1");
        assert!(m.is_running);
    }

    #[test]
    fn test_start_while_running_keeps_elapsed_time() {
        // Double-click on Start, or Start re-issued after reloading a
        // running snapshot: the original anchor must survive.
        let m = started();
        let m = start_clock(&m, t0() + Duration::seconds(30)).unwrap();
        assert_eq!(m.last_timestamp, Some(t0()));
        let m = pause_clock(&m, t0() + Duration::seconds(40)).unwrap();
        assert_eq!(m.periods[0].duration_secs, 40);
    }

    #[test]
    fn test_pause_banks_elapsed_time() {
        let m = started();
        let m = pause_clock(&m, t0() + Duration::seconds(90)).unwrap();
        assert!(!m.is_running);
        assert_eq!(m.periods[0].duration_secs, 90);
    }

    #[test]
    fn test_pause_before_start_fails() {
        let err = pause_clock(&Match::default(), t0()).unwrap_err();
        assert!(matches!(err, EngineError::NoActivePeriod));
    }

    #[test]
    fn test_add_period_freezes_previous_and_resets_clock() {
        let m = started();
        let m = add_period(&m, PeriodType::Regular, t0() + Duration::seconds(2700)).unwrap();
        assert_eq!(m.periods.len(), 2);
        assert!(m.periods[0].is_finished);
        assert_eq!(m.periods[0].duration_secs, 2700);
        assert_eq!(m.periods[1].label, "Period 2");
        assert_eq!(m.periods[1].duration_secs, 0);
        assert!(!m.is_running);
    }

    #[test]
    fn test_interval_then_second_half_labels() {
        let m = started();
        let m = start_interval(&m, t0() + Duration::seconds(2700)).unwrap();
        assert_eq!(m.periods[1].period_type, PeriodType::Interval);
        let m = add_period(&m, PeriodType::Regular, t0() + Duration::seconds(3600)).unwrap();
        assert_eq!(m.periods[2].label, "Period 2");
    }

    #[test]
    fn test_remove_last_period_reinstates_previous() {
        let m = started();
        let m = pause_clock(&m, t0() + Duration::seconds(100)).unwrap();
        let m = add_period(&m, PeriodType::Extra, t0() + Duration::seconds(100)).unwrap();
        let m = remove_last_period(&m, t0() + Duration::seconds(150)).unwrap();
        assert_eq!(m.periods.len(), 1);
        assert!(!m.periods[0].is_finished);
        assert_eq!(m.periods[0].duration_secs, 100);
        assert!(!m.is_running);
    }

    #[test]
    fn test_remove_only_period_fails() {
        let m = started();
        let err = remove_last_period(&m, t0()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPeriodRemoval));
    }

    #[test]
    fn test_finish_freezes_everything() {
        let m = started();
        let m = finish(&m, t0() + Duration::seconds(300)).unwrap();
        assert!(m.is_finished);
        assert!(!m.is_running);
        assert!(m.periods[0].is_finished);
        assert_eq!(m.periods[0].duration_secs, 300);
        assert!(matches!(
            start_clock(&m, t0()).unwrap_err(),
            EngineError::MatchFinished
        ));
    }

    #[test]
    fn test_continue_last_regular_period() {
        let m = started();
        let m = finish(&m, t0() + Duration::seconds(300)).unwrap();
        let m = continue_last_period(&m, t0() + Duration::seconds(400)).unwrap();
        assert!(!m.is_finished);
        assert!(!m.periods[0].is_finished);
        assert!(m.is_running);
        // The banked 300 seconds survive the round trip.
        assert_eq!(m.periods[0].duration_secs, 300);
    }

    #[test]
    fn test_continue_refused_after_interval() {
        let m = started();
        let m = start_interval(&m, t0() + Duration::seconds(2700)).unwrap();
        let m = finish(&m, t0() + Duration::seconds(2710)).unwrap();
        let err = continue_last_period(&m, t0() + Duration::seconds(2720)).unwrap_err();
        assert!(matches!(err, EngineError::MatchFinished));
    }

    #[test]
    fn test_continue_on_live_match_is_noop() {
        let m = started();
        let again = continue_last_period(&m, t0() + Duration::seconds(10)).unwrap();
        assert_eq!(again, m);
    }
}
