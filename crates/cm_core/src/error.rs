use thiserror::Error;
use uuid::Uuid;

/// Validation failures returned by the engine's command functions.
///
/// These are results, not exceptions: a failed command leaves the caller's
/// prior state untouched and authoritative. The engine has no fatal errors of
/// its own; persistence failures are the caller's concern.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("player {player_id} is not on the field")]
    PlayerNotOnField { player_id: Uuid },

    #[error("player {player_id} is already on the field")]
    PlayerAlreadyOnField { player_id: Uuid },

    #[error("jersey number {number} is already taken in this lineup")]
    DuplicateJerseyNumber { number: u8 },

    #[error("cannot remove the only remaining period")]
    InvalidPeriodRemoval,

    #[error("no active period: the match has not been started")]
    NoActivePeriod,

    #[error("the match is finished; continue the last period first")]
    MatchFinished,

    #[error("snapshot decode error: {0}")]
    SnapshotDecode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
