pub mod clock;
pub mod commands;
pub mod lineup;
pub mod period_map;
pub mod periods;
pub mod score;

pub use clock::{elapsed_secs, PeriodClock};
pub use commands::{apply, Command};
pub use lineup::reconstruct;
pub use period_map::{map_to_period, period_for_event, period_for_substitution};
