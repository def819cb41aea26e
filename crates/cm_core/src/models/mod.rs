pub mod events;
pub mod lineup;
pub mod match_state;
pub mod period;

pub use events::{EventType, MatchEvent, Substitution, TeamSide};
pub use lineup::MatchPlayer;
pub use match_state::Match;
pub use period::{Period, PeriodType};
