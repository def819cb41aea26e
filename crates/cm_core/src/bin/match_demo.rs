use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use cm_core::{apply, Command, EventType, Match, MatchPlayer, MatchReport, PeriodType, TeamSide};

/// Scripted operator session: kick-off, a goal, half-time, a substitution,
/// full-time, then the per-period report.
fn main() -> Result<()> {
    let kickoff = Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap();

    let sheet = vec![
        MatchPlayer::new(Uuid::from_u128(1), 1, "GK"),
        MatchPlayer::new(Uuid::from_u128(2), 4, "DF"),
        MatchPlayer::new(Uuid::from_u128(3), 7, "MF"),
        MatchPlayer::new(Uuid::from_u128(4), 9, "FW"),
    ];

    let mut state = Match::with_lineup(sheet);
    let dispatch = |s: &Match, cmd: Command, offset_secs: i64| {
        apply(s, cmd, kickoff + Duration::seconds(offset_secs))
    };

    state = dispatch(&state, Command::Start, 0)?;
    println!("kick-off, {} period(s)", state.periods.len());

    state = dispatch(
        &state,
        Command::AddGoal {
            side: TeamSide::Own,
            scorer_id: Some(Uuid::from_u128(4)),
            minute: 23,
            second: 10,
        },
        23 * 60 + 10,
    )?;
    println!("goal! {}-{}", state.home_score, state.away_score);

    state = dispatch(&state, Command::Pause, 45 * 60)?;
    state = dispatch(&state, Command::StartInterval, 45 * 60)?;
    state = dispatch(&state, Command::Start, 45 * 60)?;
    state = dispatch(
        &state,
        Command::AddPeriod {
            period_type: PeriodType::Regular,
        },
        60 * 60,
    )?;
    state = dispatch(&state, Command::Start, 60 * 60)?;
    println!("second half under way");

    state = dispatch(
        &state,
        Command::ApplySubstitution {
            minute: 60,
            second: 0,
            player_out: Uuid::from_u128(3),
            player_in: Uuid::from_u128(12),
        },
        75 * 60,
    )?;
    println!(
        "substitution applied, on-field ids: {:?}",
        state
            .lineup
            .iter()
            .map(|p| p.player_id.as_u128())
            .collect::<Vec<_>>()
    );

    state = dispatch(
        &state,
        Command::AddEvent {
            event_type: EventType::YellowCard,
            minute: 70,
            second: 30,
            player_id: Some(Uuid::from_u128(2)),
            description: Some("late challenge".to_string()),
            team_side: TeamSide::Own,
        },
        85 * 60 + 30,
    )?;

    state = dispatch(&state, Command::Finish, 105 * 60)?;
    println!(
        "full-time {}-{}",
        state.home_score, state.away_score
    );

    let report = MatchReport::build(&state, kickoff + Duration::seconds(105 * 60));
    for period in &report.periods {
        println!(
            "[{}] {} ({}) - {} event(s), {} sub(s)",
            period.index,
            period.period.label,
            period.duration_label,
            period.events.len(),
            period.substitutions.len()
        );
    }

    Ok(())
}
