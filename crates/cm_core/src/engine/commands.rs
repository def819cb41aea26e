//! The engine's single mutation boundary.
//!
//! The UI dispatches a [`Command`] against the current [`Match`] and either
//! replaces its state with the returned value or surfaces the error. Every
//! arm validates completely before building the next state, so a failed
//! command leaves the prior state authoritative.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{lineup, period_map, periods, score};
use crate::error::{EngineError, Result};
use crate::models::{EventType, Match, MatchEvent, PeriodType, Substitution, TeamSide};

/// Operator commands, one per UI action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    AddPeriod {
        period_type: PeriodType,
    },
    StartInterval,
    RemoveLastPeriod,
    Finish,
    ContinueLastPeriod,
    ApplySubstitution {
        minute: u16,
        second: u8,
        player_out: Uuid,
        player_in: Uuid,
    },
    RemoveSubstitution {
        id: Uuid,
    },
    AddGoal {
        side: TeamSide,
        #[serde(skip_serializing_if = "Option::is_none")]
        scorer_id: Option<Uuid>,
        minute: u16,
        second: u8,
    },
    RemoveGoal {
        side: TeamSide,
    },
    AddEvent {
        #[serde(rename = "type")]
        event_type: EventType,
        minute: u16,
        second: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        player_id: Option<Uuid>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        team_side: TeamSide,
    },
    RemoveEvent {
        id: Uuid,
    },
}

/// Apply one command to `m`, returning the next state.
pub fn apply(m: &Match, command: Command, now: DateTime<Utc>) -> Result<Match> {
    debug!("applying {command:?}");
    match command {
        Command::Start => periods::start_clock(m, now),
        Command::Pause => periods::pause_clock(m, now),
        Command::AddPeriod { period_type } => periods::add_period(m, period_type, now),
        Command::StartInterval => periods::start_interval(m, now),
        Command::RemoveLastPeriod => periods::remove_last_period(m, now),
        Command::Finish => periods::finish(m, now),
        Command::ContinueLastPeriod => periods::continue_last_period(m, now),
        Command::ApplySubstitution {
            minute,
            second,
            player_out,
            player_in,
        } => apply_substitution(m, minute, second, player_out, player_in),
        Command::RemoveSubstitution { id } => remove_substitution(m, id),
        Command::AddGoal {
            side,
            scorer_id,
            minute,
            second,
        } => score::add_goal(m, side, scorer_id, minute, second),
        Command::RemoveGoal { side } => score::remove_last_goal(m, side),
        Command::AddEvent {
            event_type,
            minute,
            second,
            player_id,
            description,
            team_side,
        } => add_event(
            m, event_type, minute, second, player_id, description, team_side,
        ),
        Command::RemoveEvent { id } => remove_event(m, id),
    }
}

fn apply_substitution(
    m: &Match,
    minute: u16,
    second: u8,
    player_out: Uuid,
    player_in: Uuid,
) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    let t = u32::from(minute) * 60 + u32::from(second);
    let candidate = Substitution {
        id: Uuid::new_v4(),
        minute,
        second,
        player_out,
        player_in,
        period_index: period_map::map_to_period(&m.periods, t),
    };
    let mut history = m.substitutions.clone();
    history.push(candidate);
    history.sort_by_key(Substitution::absolute_secs);

    // Validates the whole history including the new entry; rejects the
    // command wholesale on any violation.
    let roster = lineup::reconstruct(&m.initial_lineup, &history)?;

    let mut next = m.clone();
    next.substitutions = history;
    next.lineup = roster;
    Ok(next)
}

fn remove_substitution(m: &Match, id: Uuid) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.substitutions.iter().any(|s| s.id == id) {
        return Ok(m.clone());
    }
    let remainder: Vec<Substitution> = m
        .substitutions
        .iter()
        .filter(|s| s.id != id)
        .cloned()
        .collect();

    // Full replay from the team sheet; a dependent chain broken by the
    // deletion fails here and nothing is mutated.
    let roster = lineup::reconstruct(&m.initial_lineup, &remainder)?;

    let mut next = m.clone();
    next.substitutions = remainder;
    next.lineup = roster;
    Ok(next)
}

#[allow(clippy::too_many_arguments)]
fn add_event(
    m: &Match,
    event_type: EventType,
    minute: u16,
    second: u8,
    player_id: Option<Uuid>,
    description: Option<String>,
    team_side: TeamSide,
) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    if !m.has_started() {
        return Err(EngineError::NoActivePeriod);
    }
    let t = u32::from(minute) * 60 + u32::from(second);
    let period_index =
        period_map::map_to_period(&m.periods, t).ok_or(EngineError::NoActivePeriod)?;
    let mut next = m.clone();
    let affects_score = event_type.counts_for_score();
    next.events.push(MatchEvent {
        id: Uuid::new_v4(),
        event_type,
        minute,
        second,
        player_id,
        description,
        team_side,
        period_index: Some(period_index),
    });
    if affects_score {
        next = score::reconcile(&next);
    }
    Ok(next)
}

fn remove_event(m: &Match, id: Uuid) -> Result<Match> {
    if m.is_finished {
        return Err(EngineError::MatchFinished);
    }
    let mut next = m.clone();
    let before = next.events.len();
    next.events.retain(|e| e.id != id);
    if next.events.len() != before {
        // Generic removal may have deleted a goal; the recount is the
        // authority after any such edit.
        next = score::reconcile(&next);
    }
    Ok(next)
}
