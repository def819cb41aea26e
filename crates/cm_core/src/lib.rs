//! # cm_core - Match Timeline Engine
//!
//! Engine behind the clubmatch roster tool's live match screen: period
//! sequencing and the wall-clock stopwatch, lineup reconstruction from the
//! substitution history, event-to-period attribution and scoreboard
//! consistency.
//!
//! ## Design
//! - Pure command functions: `(state, command, now) -> Result<state>`; the
//!   host owns all side effects (rendering, persistence)
//! - Typed validation errors; a failed command never mutates state
//! - Elapsed time computed on read from an accumulated duration plus a
//!   running wall-clock anchor; crash recovery falls out of the same formula
//! - Single operator session per match; the engine performs no locking

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod save;

pub use api::apply_command_json;
pub use engine::{apply, elapsed_secs, reconstruct, Command, PeriodClock};
pub use error::{EngineError, Result};
pub use models::{
    EventType, Match, MatchEvent, MatchPlayer, Period, PeriodType, Substitution, TeamSide,
};
pub use report::{MatchReport, PeriodReport};
pub use save::MatchSnapshot;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
