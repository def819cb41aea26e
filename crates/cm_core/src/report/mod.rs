//! Read model for the export layer: events and substitutions grouped by the
//! period they belong to, with clock-derived duration labels.
//!
//! The PDF/CSV exporters consume this struct as-is; nothing here mutates the
//! match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{clock, period_map};
use crate::models::{Match, MatchEvent, Period, Substitution};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodReport {
    pub index: usize,
    pub period: Period,
    /// `mm:ss` rendering of the period's elapsed time; the current period
    /// includes any still-running wall-clock time.
    pub duration_label: String,
    pub events: Vec<MatchEvent>,
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchReport {
    pub home_score: u16,
    pub away_score: u16,
    pub periods: Vec<PeriodReport>,
}

impl MatchReport {
    pub fn build(m: &Match, now: DateTime<Utc>) -> Self {
        let current = m.periods.len().checked_sub(1);
        let mut periods: Vec<PeriodReport> = m
            .periods
            .iter()
            .enumerate()
            .map(|(index, period)| {
                let secs = if current == Some(index) {
                    clock::elapsed_secs(m, now)
                } else {
                    period.duration_secs
                };
                PeriodReport {
                    index,
                    period: period.clone(),
                    duration_label: duration_label(secs),
                    events: Vec::new(),
                    substitutions: Vec::new(),
                }
            })
            .collect();

        for event in &m.events {
            if let Some(idx) = period_map::period_for_event(&m.periods, event) {
                periods[idx].events.push(event.clone());
            }
        }
        for sub in &m.substitutions {
            if let Some(idx) = period_map::period_for_substitution(&m.periods, sub) {
                periods[idx].substitutions.push(sub.clone());
            }
        }
        for period in &mut periods {
            period.events.sort_by_key(MatchEvent::absolute_secs);
            period.substitutions.sort_by_key(Substitution::absolute_secs);
        }

        Self {
            home_score: m.home_score,
            away_score: m.away_score,
            periods,
        }
    }
}

fn duration_label(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
