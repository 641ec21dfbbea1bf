//! Team identity and season-long metadata from the registry.

use crate::domain::TeamId;
use serde::{Deserialize, Serialize};

/// A registered team.
///
/// `point_adjustment` is a season-long correction (usually a negative
/// disciplinary deduction) applied once per table, never per match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// Stable unique identifier for this team.
    pub id: TeamId,
    /// Human-readable club name.
    pub display_name: String,
    /// Points added to (or deducted from) every non-zero-cutoff table.
    pub point_adjustment: i64,
}

impl Team {
    /// Create a new Team.
    pub fn new(id: TeamId, display_name: impl Into<String>, point_adjustment: i64) -> Self {
        Team {
            id,
            display_name: display_name.into(),
            point_adjustment,
        }
    }
}
