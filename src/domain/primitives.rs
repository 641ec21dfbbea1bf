//! Domain primitives: TeamId, MatchId, Matchweek.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a club, as keyed by the upstream store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub Uuid);

impl TeamId {
    /// Create a TeamId from a UUID.
    pub fn new(id: Uuid) -> Self {
        TeamId(id)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    /// Create a MatchId from a UUID.
    pub fn new(id: Uuid) -> Self {
        MatchId(id)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round number a match is assigned to, independent of calendar date.
///
/// Week 1 is the season opener; 0 is never a valid matchweek (cutoff 0
/// means "before the season started" and carries no matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Matchweek(pub u8);

impl Matchweek {
    /// Create a Matchweek from a round number.
    pub fn new(week: u8) -> Self {
        Matchweek(week)
    }

    /// Get the underlying round number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Matchweek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
