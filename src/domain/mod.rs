//! Domain types and determinism layer for the standings engine.
//!
//! This module provides:
//! - Domain primitives: TeamId, MatchId, Matchweek
//! - Match and Team records with canonical JSON serialization
//! - Derived StandingsRow/StandingsTable values
//! - Stable table ordering key for deterministic ranking

pub mod fixture;
pub mod ordering;
pub mod primitives;
pub mod standings;
pub mod team;

pub use fixture::Match;
pub use ordering::{sort_rows, TableOrderingKey};
pub use primitives::{MatchId, Matchweek, TeamId};
pub use standings::{StandingsRow, StandingsTable};
pub use team::Team;
