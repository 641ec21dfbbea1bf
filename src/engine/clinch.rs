//! Mathematical first-place clinch detection.

use crate::domain::{StandingsTable, TeamId};
use crate::engine::simulation::SimulatedFixtureSet;
use std::collections::BTreeSet;

/// Teams whose first-place finish is already guaranteed under this
/// session (normally zero or one).
///
/// The answer is empty unless a simulation is in progress and every
/// fixture in it is filled: a partially-filled session means "not yet
/// determined", never "no". With all fixtures filled, the leader
/// clinches iff no other team's ceiling, `points + 3 * remaining
/// fixtures involving it`, reaches the leader's points. Teams tied for
/// the lead never clinch.
pub fn clinched_teams(
    projected: &StandingsTable,
    fixtures: &SimulatedFixtureSet,
) -> BTreeSet<TeamId> {
    let mut clinched = BTreeSet::new();
    if fixtures.is_empty() || !fixtures.is_complete() {
        return clinched;
    }
    let leader = match projected.leader() {
        Some(leader) => leader,
        None => return clinched,
    };

    for row in projected.rows.iter().skip(1) {
        let ceiling = row.points + 3 * fixtures.remaining_for(row.team_id) as i64;
        if ceiling >= leader.points {
            return clinched;
        }
    }

    clinched.insert(leader.team_id);
    clinched
}
