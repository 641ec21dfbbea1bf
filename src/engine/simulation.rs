//! Hypothetical-result overlay for the title race.

use crate::domain::{sort_rows, Match, MatchId, Matchweek, StandingsRow, StandingsTable, TeamId};
use crate::engine::aggregator::apply_result;
use crate::error::EngineError;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One not-yet-played fixture a caller may assign a hypothetical result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedFixture {
    /// Ledger id of the underlying match.
    pub match_id: MatchId,
    /// Home side.
    pub home_team: TeamId,
    /// Away side.
    pub away_team: TeamId,
    /// Scheduled round, always past the session's cutoff.
    pub matchweek: Matchweek,
    /// Caller-chosen (home, away) score; `None` while unfilled.
    pub result: Option<(u32, u32)>,
}

impl SimulatedFixture {
    /// Whether a hypothetical result has been entered.
    pub fn is_filled(&self) -> bool {
        self.result.is_some()
    }
}

/// One simulation session's fixtures, keyed by match id.
///
/// Membership is fixed at construction: the fixtures between the base
/// table's top-K teams whose matchweek lies strictly past the cutoff.
/// Top-K is judged once, from the base table at the moment the session
/// starts, and is deliberately not re-judged as results are filled in,
/// even when a filled result would change who is "top-K".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedFixtureSet {
    cutoff: u8,
    fixtures: BTreeMap<MatchId, SimulatedFixture>,
}

impl SimulatedFixtureSet {
    /// Build a session from a base table and the season ledger.
    pub fn from_ledger(base: &StandingsTable, matches: &[Match], top_k: usize) -> Self {
        let contenders: HashSet<TeamId> = base.top_k(top_k).into_iter().collect();
        let mut fixtures = BTreeMap::new();
        for m in matches {
            let week = match m.matchweek {
                Some(week) if week.as_u8() > base.cutoff => week,
                _ => continue,
            };
            if !contenders.contains(&m.home_team) || !contenders.contains(&m.away_team) {
                continue;
            }
            fixtures.entry(m.id).or_insert(SimulatedFixture {
                match_id: m.id,
                home_team: m.home_team,
                away_team: m.away_team,
                matchweek: week,
                result: None,
            });
        }
        SimulatedFixtureSet {
            cutoff: base.cutoff,
            fixtures,
        }
    }

    /// Cutoff of the base table this session was entered from.
    pub fn cutoff(&self) -> u8 {
        self.cutoff
    }

    /// Enter a hypothetical result for a fixture in this session.
    pub fn fill(
        &mut self,
        match_id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), EngineError> {
        match self.fixtures.get_mut(&match_id) {
            Some(fixture) => {
                fixture.result = Some((home_score, away_score));
                Ok(())
            }
            None => Err(EngineError::UnknownFixture { match_id }),
        }
    }

    /// Remove a previously entered result, returning the fixture to
    /// unfilled.
    pub fn clear(&mut self, match_id: MatchId) -> Result<(), EngineError> {
        match self.fixtures.get_mut(&match_id) {
            Some(fixture) => {
                fixture.result = None;
                Ok(())
            }
            None => Err(EngineError::UnknownFixture { match_id }),
        }
    }

    /// Look up a fixture by match id.
    pub fn get(&self, match_id: MatchId) -> Option<&SimulatedFixture> {
        self.fixtures.get(&match_id)
    }

    /// Fixtures in deterministic match-id order.
    pub fn iter(&self) -> impl Iterator<Item = &SimulatedFixture> {
        self.fixtures.values()
    }

    /// Number of fixtures in the session.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the session holds no fixtures at all.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Number of fixtures with a result entered.
    pub fn filled_count(&self) -> usize {
        self.fixtures.values().filter(|f| f.is_filled()).count()
    }

    /// Whether every fixture has a result entered.
    pub fn is_complete(&self) -> bool {
        self.fixtures.values().all(|f| f.is_filled())
    }

    /// Unfilled fixtures a team is still involved in.
    pub fn remaining_for(&self, team: TeamId) -> usize {
        self.fixtures
            .values()
            .filter(|f| !f.is_filled() && (f.home_team == team || f.away_team == team))
            .count()
    }
}

/// Project a table from a base snapshot plus this session's filled
/// results.
///
/// The base rows are cloned, never touched: an empty or all-unfilled
/// session yields a value-equal but independent copy of the base. Once
/// any result is applied the rows are re-ranked with the competitive
/// ordering (the preseason name ordering only exists for all-zero
/// tables).
pub fn project(base: &StandingsTable, fixtures: &SimulatedFixtureSet) -> StandingsTable {
    let mut rows: Vec<StandingsRow> = base.rows.clone();
    if fixtures.filled_count() == 0 {
        return StandingsTable {
            cutoff: base.cutoff,
            rows,
        };
    }

    let index: HashMap<TeamId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.team_id, i))
        .collect();
    for fixture in fixtures.iter() {
        if let Some((home_score, away_score)) = fixture.result {
            apply_result(
                &mut rows,
                &index,
                fixture.home_team,
                fixture.away_team,
                home_score,
                away_score,
            );
        }
    }

    sort_rows(&mut rows, base.cutoff.max(1));
    StandingsTable {
        cutoff: base.cutoff,
        rows,
    }
}
