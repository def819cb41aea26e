//! JSON boundary for an embedding UI: snapshot in, command in, snapshot out.
//!
//! The engine stays framework-agnostic; the host decodes the returned
//! snapshot for rendering and persists it at its own pace. Errors come back
//! as typed [`crate::error::EngineError`] values for the host to surface.

use chrono::{DateTime, Utc};

use crate::engine::{self, Command};
use crate::error::Result;
use crate::save;

/// Decode a match snapshot and a command, apply the command, return the next
/// snapshot as JSON. `now` is supplied by the host so replays and tests stay
/// deterministic.
pub fn apply_command_json(
    state_json: &str,
    command_json: &str,
    now: DateTime<Utc>,
) -> Result<String> {
    let state = save::from_json(state_json)?;
    let command: Command = serde_json::from_str(command_json)?;
    let next = engine::apply(&state, command, now)?;
    save::to_json(&next)
}
