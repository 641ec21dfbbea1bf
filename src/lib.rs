//! Standings computation and title-race simulation engine.
//!
//! A pure, synchronous core that turns a season's match ledger into
//! ranked league tables at any matchweek cutoff, layers caller-chosen
//! hypothetical results on top, and decides whether the leading team has
//! mathematically secured first place. Consumed in-process by a
//! presentation layer; no I/O lives here.

pub mod cache;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod service;

pub use cache::SnapshotCache;
pub use config::{ConfigError, EngineConfig};
pub use domain::{
    Match, MatchId, Matchweek, StandingsRow, StandingsTable, TableOrderingKey, Team, TeamId,
};
pub use engine::{clinched_teams, project, season_tables, SimulatedFixture, SimulatedFixtureSet};
pub use error::EngineError;
pub use ingest::IngestError;
pub use service::StandingsService;
