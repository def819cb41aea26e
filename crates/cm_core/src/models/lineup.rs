use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One on-field slot in a lineup: the player currently occupying it, the
/// jersey they wear and the position label shown on the team sheet.
///
/// Substitutions swap `player_id` and leave jersey and position with the slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchPlayer {
    pub player_id: Uuid,
    pub jersey_number: u8,
    pub position: String,
}

impl MatchPlayer {
    pub fn new(player_id: Uuid, jersey_number: u8, position: impl Into<String>) -> Self {
        Self {
            player_id,
            jersey_number,
            position: position.into(),
        }
    }
}
