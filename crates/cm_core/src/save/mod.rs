//! Persistence boundary: the JSON shape the store keeps for a match session.
//!
//! The snapshot is the full engine state and nothing else — rehydrating from
//! it requires no additional context. A snapshot taken while the clock was
//! running reconstructs the missed wall-clock time on the next read (see
//! `engine::clock`). Durability, retries and the relational schema are the
//! caller's concern.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Match;
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub schema_version: u8,
    #[serde(flatten)]
    pub state: Match,
}

impl MatchSnapshot {
    pub fn capture(state: &Match) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            state: state.clone(),
        }
    }

    pub fn restore(self) -> Match {
        if self.schema_version != SCHEMA_VERSION {
            warn!(
                "snapshot schema {} differs from engine schema {SCHEMA_VERSION}",
                self.schema_version
            );
        }
        self.state
    }
}

pub fn to_json(state: &Match) -> Result<String> {
    Ok(serde_json::to_string(&MatchSnapshot::capture(state))?)
}

pub fn from_json(json: &str) -> Result<Match> {
    let snapshot: MatchSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.restore())
}
