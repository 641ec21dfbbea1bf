//! Caller-facing façade over the cache, overlay, and clinch detector.

use crate::cache::SnapshotCache;
use crate::config::EngineConfig;
use crate::domain::{Match, StandingsTable, Team, TeamId};
use crate::engine::{clinch, simulation, SimulatedFixtureSet};
use crate::error::EngineError;
use std::collections::BTreeSet;

/// One season's standings engine: ranked tables at any cutoff, plus
/// title-race simulation sessions layered on top.
///
/// The service is synchronous and side-effect free; callers hand it the
/// current ledger on every call and it reuses cached snapshots as long
/// as the ledger's value has not changed.
pub struct StandingsService {
    config: EngineConfig,
    cache: SnapshotCache,
}

impl StandingsService {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cache: SnapshotCache::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The ranked table at a cutoff.
    pub fn table(
        &self,
        matches: &[Match],
        teams: &[Team],
        cutoff: u8,
    ) -> Result<StandingsTable, EngineError> {
        self.cache.table(matches, teams, cutoff)
    }

    /// Start a simulation session from the table at `cutoff`: the
    /// unfilled future fixtures between that table's top-K teams.
    pub fn simulation(
        &self,
        matches: &[Match],
        teams: &[Team],
        cutoff: u8,
    ) -> Result<SimulatedFixtureSet, EngineError> {
        let base = self.cache.table(matches, teams, cutoff)?;
        Ok(SimulatedFixtureSet::from_ledger(
            &base,
            matches,
            self.config.top_k,
        ))
    }

    /// Project a table from the session's base snapshot plus its filled
    /// results.
    pub fn project(
        &self,
        matches: &[Match],
        teams: &[Team],
        fixtures: &SimulatedFixtureSet,
    ) -> Result<StandingsTable, EngineError> {
        let base = self.cache.table(matches, teams, fixtures.cutoff())?;
        Ok(simulation::project(&base, fixtures))
    }

    /// Teams that have mathematically secured first place under this
    /// session.
    pub fn clinched_teams(
        &self,
        projected: &StandingsTable,
        fixtures: &SimulatedFixtureSet,
    ) -> BTreeSet<TeamId> {
        clinch::clinched_teams(projected, fixtures)
    }
}

impl Default for StandingsService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
