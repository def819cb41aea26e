use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which scoreboard a tagged event counts for. `Own` is the club's own team
/// (the home column of the scoreboard), `Opponent` the away column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Own,
    Opponent,
}

/// Closed set of recordable match events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    OwnGoal,
    YellowCard,
    RedCard,
    YellowRedCard,
    Foul,
    Corner,
    Offside,
    Penalty,
    Injury,
    Other,
}

impl EventType {
    /// Only plain goals move the scoreboard; an own goal is recorded against
    /// the player but credited by tagging the event with the benefiting side.
    pub fn counts_for_score(self) -> bool {
        matches!(self, EventType::Goal)
    }
}

/// A timestamped occurrence attributed to a side and, optionally, a player.
///
/// `period_index` is stamped at creation time from the period windows then in
/// effect; when periods are edited retrospectively the stamp wins for
/// reporting and the structural mapping is the fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub minute: u16,
    pub second: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub team_side: TeamSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_index: Option<usize>,
}

impl MatchEvent {
    /// Absolute match time in seconds, the replay ordering key.
    pub fn absolute_secs(&self) -> u32 {
        u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

/// A one-for-one player swap in the lineup, replayed in (minute, second)
/// order when the lineup is reconstructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Substitution {
    pub id: Uuid,
    pub minute: u16,
    pub second: u8,
    pub player_out: Uuid,
    pub player_in: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_index: Option<usize>,
}

impl Substitution {
    pub fn absolute_secs(&self) -> u32 {
        u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_goal_counts_for_score() {
        for kind in EventType::iter() {
            assert_eq!(kind.counts_for_score(), matches!(kind, EventType::Goal));
        }
    }

    #[test]
    fn test_absolute_secs() {
        let event = MatchEvent {
            id: Uuid::new_v4(),
            event_type: EventType::Corner,
            minute: 47,
            second: 12,
            player_id: None,
            description: None,
            team_side: TeamSide::Own,
            period_index: None,
        };
        assert_eq!(event.absolute_secs(), 47 * 60 + 12);
    }

    #[test]
    fn test_event_type_round_trips_snake_case() {
        for kind in EventType::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EventType = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
        assert_eq!(
            serde_json::to_string(&EventType::YellowRedCard).unwrap(),
            "\"yellow_red_card\""
        );
    }
}
