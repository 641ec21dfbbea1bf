//! Season fold: running per-team totals, snapshotted at every matchweek
//! boundary.
//!
//! Because the matches counted at cutoff `c` are a strict prefix of the
//! matches counted at `c + 1`, all tables for one season come out of a
//! single forward pass: fold matches in matchweek order and copy the row
//! set at each boundary, rather than re-folding per cutoff.

use crate::domain::{
    sort_rows, Match, MatchId, Matchweek, StandingsRow, StandingsTable, Team, TeamId,
};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Apply one final score to both participants' running rows.
///
/// 3 points to a strict winner, 1 each for a draw. Returns false without
/// touching anything when a participant is not in the row index.
pub(crate) fn apply_result(
    rows: &mut [StandingsRow],
    index: &HashMap<TeamId, usize>,
    home_team: TeamId,
    away_team: TeamId,
    home_score: u32,
    away_score: u32,
) -> bool {
    let (home, away) = match (index.get(&home_team), index.get(&away_team)) {
        (Some(&home), Some(&away)) => (home, away),
        _ => return false,
    };

    rows[home].played += 1;
    rows[home].goals_for += home_score;
    rows[home].goals_against += away_score;

    rows[away].played += 1;
    rows[away].goals_for += away_score;
    rows[away].goals_against += home_score;

    match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => {
            rows[home].won += 1;
            rows[home].points += 3;
            rows[away].lost += 1;
        }
        std::cmp::Ordering::Less => {
            rows[away].won += 1;
            rows[away].points += 3;
            rows[home].lost += 1;
        }
        std::cmp::Ordering::Equal => {
            rows[home].drawn += 1;
            rows[home].points += 1;
            rows[away].drawn += 1;
            rows[away].points += 1;
        }
    }
    true
}

/// Compute every table from cutoff 0 through the final matchweek.
///
/// Matches outside `1..=final_matchweek` (including unscheduled ones)
/// are excluded. Duplicate match ids are counted once: the first
/// occurrence in matchweek order wins (stable within a week by ledger
/// position), which keeps every cutoff a true prefix of the next.
/// Registry point adjustments land on each snapshot with a non-zero
/// cutoff, never on the preseason table.
pub fn season_tables(
    matches: &[Match],
    teams: &[Team],
    final_matchweek: Matchweek,
) -> Vec<StandingsTable> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|t| StandingsRow::zeroed(t.id, t.display_name.clone()))
        .collect();
    let index: HashMap<TeamId, usize> = teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
    let adjustments: Vec<i64> = teams.iter().map(|t| t.point_adjustment).collect();

    let mut scheduled: Vec<&Match> = matches
        .iter()
        .filter(|m| {
            m.matchweek
                .is_some_and(|w| w.as_u8() >= 1 && w <= final_matchweek)
        })
        .collect();
    scheduled.sort_by_key(|m| m.matchweek);

    let mut seen: HashSet<MatchId> = HashSet::with_capacity(scheduled.len());
    let mut tables = Vec::with_capacity(usize::from(final_matchweek.as_u8()) + 1);
    tables.push(snapshot(0, &rows, &adjustments));

    let mut next = 0;
    for week in 1..=final_matchweek.as_u8() {
        while next < scheduled.len() && scheduled[next].matchweek == Some(Matchweek::new(week)) {
            let m = scheduled[next];
            next += 1;
            if !seen.insert(m.id) {
                continue;
            }
            if !apply_result(
                &mut rows,
                &index,
                m.home_team,
                m.away_team,
                m.home_score,
                m.away_score,
            ) {
                warn!(match_id = %m.id, "match references an unregistered team, skipped");
            }
        }
        tables.push(snapshot(week, &rows, &adjustments));
    }

    tables
}

/// Copy the running rows into an independent, ranked table.
fn snapshot(cutoff: u8, rows: &[StandingsRow], adjustments: &[i64]) -> StandingsTable {
    let mut rows = rows.to_vec();
    if cutoff > 0 {
        for (row, adjustment) in rows.iter_mut().zip(adjustments) {
            row.points += adjustment;
        }
    }
    sort_rows(&mut rows, cutoff);
    StandingsTable { cutoff, rows }
}
