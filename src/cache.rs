//! Memoized season snapshots, rebuilt wholesale when the ledger changes.
//!
//! One cached season holds every table from cutoff 0 through the final
//! matchweek. The cache is keyed by a fingerprint of the (matches,
//! teams) values, so equal inputs hit regardless of identity, and any
//! change invalidates all cutoffs at once. A rebuild is assembled off to
//! the side and published in a single swap; readers hold `Arc`s to
//! immutable tables and can never observe a half-rebuilt season.

use crate::config::EngineConfig;
use crate::domain::{Match, StandingsTable, Team};
use crate::engine::season_tables;
use crate::error::EngineError;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Fingerprint of the ledger values a season was computed from.
///
/// Field-by-field hashing in declaration order; two ledgers fingerprint
/// equal exactly when they are value-equal.
pub fn ledger_fingerprint(matches: &[Match], teams: &[Team]) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update((matches.len() as u64).to_le_bytes());
    for m in matches {
        hasher.update(m.id.as_uuid().as_bytes());
        hasher.update(m.home_team.as_uuid().as_bytes());
        hasher.update(m.away_team.as_uuid().as_bytes());
        hasher.update(m.home_score.to_le_bytes());
        hasher.update(m.away_score.to_le_bytes());
        hasher.update([m.matchweek.map_or(0, |w| w.as_u8())]);
    }
    hasher.update((teams.len() as u64).to_le_bytes());
    for t in teams {
        hasher.update(t.id.as_uuid().as_bytes());
        hasher.update((t.display_name.len() as u64).to_le_bytes());
        hasher.update(t.display_name.as_bytes());
        hasher.update(t.point_adjustment.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

struct CachedSeason {
    fingerprint: String,
    tables: Arc<Vec<StandingsTable>>,
}

/// Cache of one season's standings snapshots.
pub struct SnapshotCache {
    config: EngineConfig,
    inner: RwLock<Option<CachedSeason>>,
}

impl SnapshotCache {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(None),
        }
    }

    /// All season tables for this ledger, indexed by cutoff.
    ///
    /// Recomputes only when the ledger fingerprint changes.
    pub fn tables(&self, matches: &[Match], teams: &[Team]) -> Arc<Vec<StandingsTable>> {
        let fingerprint = ledger_fingerprint(matches, teams);

        {
            // A poisoned lock still holds a fully published season.
            let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = guard.as_ref() {
                if cached.fingerprint == fingerprint {
                    debug!(fingerprint = %&fingerprint[..12], "standings cache hit");
                    return Arc::clone(&cached.tables);
                }
            }
        }

        let tables = Arc::new(season_tables(matches, teams, self.config.final_matchweek));
        debug!(
            fingerprint = %&fingerprint[..12],
            cutoffs = tables.len(),
            "standings cache rebuilt"
        );

        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(CachedSeason {
            fingerprint,
            tables: Arc::clone(&tables),
        });
        tables
    }

    /// One table, by cutoff. Out-of-range cutoffs are caller bugs and
    /// are rejected, never clamped.
    pub fn table(
        &self,
        matches: &[Match],
        teams: &[Team],
        cutoff: u8,
    ) -> Result<StandingsTable, EngineError> {
        if !self.config.is_valid_cutoff(cutoff) {
            return Err(EngineError::CutoffOutOfRange {
                cutoff,
                final_matchweek: self.config.final_matchweek.as_u8(),
            });
        }
        let tables = self.tables(matches, teams);
        Ok(tables[usize::from(cutoff)].clone())
    }
}
