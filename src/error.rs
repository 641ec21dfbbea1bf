use crate::domain::MatchId;
use thiserror::Error;

/// Caller contract violations surfaced by the engine.
///
/// Malformed ledger data is never an error here: unscheduled matchweeks,
/// duplicate match ids, and unparsable scores are absorbed at the
/// ingestion boundary by design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cutoff {cutoff} outside valid range 0..={final_matchweek}")]
    CutoffOutOfRange { cutoff: u8, final_matchweek: u8 },
    #[error("match {match_id} is not part of this simulation")]
    UnknownFixture { match_id: MatchId },
}
