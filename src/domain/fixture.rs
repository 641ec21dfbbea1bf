//! Match record: one fixture from the season ledger.

use crate::domain::{MatchId, Matchweek, TeamId};
use serde::{Deserialize, Serialize};

/// A single match with its final full-time score.
///
/// `matchweek` is `None` when the raw record carried no usable round
/// number; such matches are excluded from every standings computation
/// (treated as not yet scheduled).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Stable unique identifier for this match.
    pub id: MatchId,
    /// Home side.
    pub home_team: TeamId,
    /// Away side.
    pub away_team: TeamId,
    /// Goals scored by the home side.
    pub home_score: u32,
    /// Goals scored by the away side.
    pub away_score: u32,
    /// Assigned round, if the ledger scheduled this match.
    pub matchweek: Option<Matchweek>,
}

impl Match {
    /// Create a new Match.
    pub fn new(
        id: MatchId,
        home_team: TeamId,
        away_team: TeamId,
        home_score: u32,
        away_score: u32,
        matchweek: Option<Matchweek>,
    ) -> Self {
        Match {
            id,
            home_team,
            away_team,
            home_score,
            away_score,
            matchweek,
        }
    }

    /// Check whether a team plays in this match.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// The winning side, or `None` for a draw.
    pub fn winner(&self) -> Option<TeamId> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(self.home_team),
            std::cmp::Ordering::Less => Some(self.away_team),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Whether the match ended level.
    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn team(n: u128) -> TeamId {
        TeamId::new(Uuid::from_u128(n))
    }

    fn played(home: u32, away: u32) -> Match {
        Match::new(
            MatchId::new(Uuid::from_u128(100)),
            team(1),
            team(2),
            home,
            away,
            Some(Matchweek::new(1)),
        )
    }

    #[test]
    fn test_winner_home() {
        assert_eq!(played(2, 0).winner(), Some(team(1)));
    }

    #[test]
    fn test_winner_away() {
        assert_eq!(played(0, 3).winner(), Some(team(2)));
    }

    #[test]
    fn test_draw_has_no_winner() {
        let m = played(1, 1);
        assert!(m.is_draw());
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_involves() {
        let m = played(1, 0);
        assert!(m.involves(team(1)));
        assert!(m.involves(team(2)));
        assert!(!m.involves(team(3)));
    }
}
