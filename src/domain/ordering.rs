//! Stable table ordering for deterministic ranking.

use crate::domain::{StandingsRow, TeamId};
use std::cmp::Reverse;

/// Stable ordering key for standings rows at a non-zero cutoff.
///
/// Ordering: points desc -> goal difference desc -> goals for desc ->
/// team id asc. The id fallback is not a competitive rule; it only
/// guarantees that two sorts of the same input can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TableOrderingKey {
    /// Points (primary sort, descending).
    pub points: Reverse<i64>,
    /// Goal difference (secondary sort, descending).
    pub goal_difference: Reverse<i64>,
    /// Goals for (tertiary sort, descending).
    pub goals_for: Reverse<u32>,
    /// Team id (fallback sort, ascending).
    pub team_id: TeamId,
}

impl TableOrderingKey {
    /// Create an ordering key from a standings row.
    pub fn from_row(row: &StandingsRow) -> Self {
        TableOrderingKey {
            points: Reverse(row.points),
            goal_difference: Reverse(row.goal_difference()),
            goals_for: Reverse(row.goals_for),
            team_id: row.team_id,
        }
    }

    /// Compare two rows for table order.
    ///
    /// Returns true if row_a finishes above row_b.
    pub fn ranks_above(row_a: &StandingsRow, row_b: &StandingsRow) -> bool {
        Self::from_row(row_a) < Self::from_row(row_b)
    }
}

/// Sort rows into final table order for the given cutoff.
///
/// At cutoff 0 every row is a zeroed tie, so the table reads as an
/// alphabetical club list; from week 1 onwards the competitive key
/// applies.
pub fn sort_rows(rows: &mut [StandingsRow], cutoff: u8) {
    if cutoff == 0 {
        rows.sort_by(|a, b| {
            a.team_name
                .cmp(&b.team_name)
                .then_with(|| a.team_id.cmp(&b.team_id))
        });
    } else {
        rows.sort_by(|a, b| TableOrderingKey::from_row(a).cmp(&TableOrderingKey::from_row(b)));
    }
}
