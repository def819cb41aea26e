//! Lineup reconstruction: replay an ordered substitution history over the
//! initial team sheet to obtain the on-field roster.
//!
//! `reconstruct` is referentially transparent — same sheet and history, same
//! roster, including on error. Deleting a substitution therefore never
//! patches the current roster: the caller drops the entry and replays the
//! remainder from the sheet.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::{MatchPlayer, Substitution};

/// Reject team sheets with a player or jersey number appearing twice.
pub fn validate_lineup(lineup: &[MatchPlayer]) -> Result<()> {
    let mut players = HashSet::new();
    let mut jerseys = HashSet::new();
    for entry in lineup {
        if !players.insert(entry.player_id) {
            return Err(EngineError::PlayerAlreadyOnField {
                player_id: entry.player_id,
            });
        }
        if !jerseys.insert(entry.jersey_number) {
            return Err(EngineError::DuplicateJerseyNumber {
                number: entry.jersey_number,
            });
        }
    }
    Ok(())
}

/// Replay `substitutions` over `initial` in (minute, second) order.
///
/// Each substitution must take off a player currently on the field and bring
/// on one who is not; the replacement inherits the slot's jersey number and
/// position. Any violation aborts the whole replay with no partial result.
pub fn reconstruct(
    initial: &[MatchPlayer],
    substitutions: &[Substitution],
) -> Result<Vec<MatchPlayer>> {
    validate_lineup(initial)?;

    let mut ordered: Vec<&Substitution> = substitutions.iter().collect();
    ordered.sort_by_key(|s| s.absolute_secs());

    let mut working = initial.to_vec();
    for sub in ordered {
        apply_one(&mut working, sub)?;
    }

    // The algorithm above cannot produce a duplicate; if one shows up the
    // history itself is corrupt and we refuse rather than silently drop.
    let mut seen = HashSet::new();
    for entry in &working {
        if !seen.insert(entry.player_id) {
            return Err(EngineError::PlayerAlreadyOnField {
                player_id: entry.player_id,
            });
        }
    }
    Ok(working)
}

fn apply_one(working: &mut [MatchPlayer], sub: &Substitution) -> Result<()> {
    let slot = working
        .iter()
        .position(|p| p.player_id == sub.player_out)
        .ok_or(EngineError::PlayerNotOnField {
            player_id: sub.player_out,
        })?;
    if working.iter().any(|p| p.player_id == sub.player_in) {
        return Err(EngineError::PlayerAlreadyOnField {
            player_id: sub.player_in,
        });
    }
    working[slot].player_id = sub.player_in;
    Ok(())
}

/// Ids of everyone currently on the field, in slot order.
pub fn player_ids(lineup: &[MatchPlayer]) -> Vec<Uuid> {
    lineup.iter().map(|p| p.player_id).collect()
}
