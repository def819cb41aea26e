use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::{MatchEvent, Substitution};
use super::lineup::MatchPlayer;
use super::period::{Period, PeriodType};

/// Aggregate root for one match session.
///
/// The engine mutates a `Match` only through the pure command functions in
/// [`crate::engine`]: every command validates fully, then returns a new value;
/// on error the caller's state stays authoritative. Exactly one operator
/// session owns a `Match` at a time — the engine performs no locking and is
/// not safe for concurrent writers.
///
/// `initial_lineup` is the team sheet at kick-off and never changes after the
/// match starts; `lineup` is the derived on-field roster after replaying
/// `substitutions` over it. Keeping the initial sheet around is what makes
/// deleting an arbitrary substitution safe: the remainder is replayed from
/// scratch instead of patching the current roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Match {
    pub periods: Vec<Period>,
    pub initial_lineup: Vec<MatchPlayer>,
    pub lineup: Vec<MatchPlayer>,
    pub substitutions: Vec<Substitution>,
    pub events: Vec<MatchEvent>,
    pub home_score: u16,
    pub away_score: u16,
    pub is_running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<DateTime<Utc>>,
    pub is_finished: bool,
}

impl Match {
    /// Pre-start match with a fixed team sheet. Periods are created by
    /// [`crate::engine::periods::start_match`].
    pub fn with_lineup(initial_lineup: Vec<MatchPlayer>) -> Self {
        Self {
            lineup: initial_lineup.clone(),
            initial_lineup,
            ..Self::default()
        }
    }

    pub fn has_started(&self) -> bool {
        !self.periods.is_empty()
    }

    /// The current period is always the last one, if any.
    pub fn current_period(&self) -> Option<&Period> {
        self.periods.last()
    }

    pub fn current_period_mut(&mut self) -> Option<&mut Period> {
        self.periods.last_mut()
    }

    /// How many periods of `kind` already exist, used for default labels.
    pub fn period_count_of(&self, kind: PeriodType) -> usize {
        self.periods
            .iter()
            .filter(|p| p.period_type == kind)
            .count()
    }
}
