//! Ingestion boundary: loosely-typed ledger records parsed once into
//! typed domain values.
//!
//! The upstream feed serves match and team rows whose numeric fields may
//! arrive as numbers, strings, or not at all. All coercion happens here,
//! exactly once: unusable scores read as 0, an unusable matchweek marks
//! the match unscheduled, and the engine only ever sees typed records.

use crate::domain::{Match, MatchId, Matchweek, Team, TeamId};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("record missing required field {0}")]
    MissingField(&'static str),
    #[error("invalid id in field {field}: {value}")]
    InvalidId { field: &'static str, value: String },
}

/// Parse raw match records, dropping records without usable identities.
///
/// A match that cannot name itself and both participants cannot be
/// aggregated at all and is logged and skipped; every other malformation
/// is coerced by design (scores to 0, matchweek to unscheduled).
pub fn parse_matches(records: &[Value], final_matchweek: Matchweek) -> Vec<Match> {
    records
        .iter()
        .filter_map(|record| match parse_match(record, final_matchweek) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("Failed to parse match record: {}", e);
                None
            }
        })
        .collect()
}

/// Parse a single raw match record.
pub fn parse_match(record: &Value, final_matchweek: Matchweek) -> Result<Match, IngestError> {
    let id = MatchId::new(parse_id(record, "id")?);
    let home_team = TeamId::new(parse_id(record, "home_team_id")?);
    let away_team = TeamId::new(parse_id(record, "away_team_id")?);

    Ok(Match {
        id,
        home_team,
        away_team,
        home_score: coerce_score(record.get("home_score")),
        away_score: coerce_score(record.get("away_score")),
        matchweek: coerce_matchweek(record.get("matchweek"), final_matchweek),
    })
}

/// Parse raw team records. Unlike matches, a registry row that cannot be
/// identified or named is a hard error: it would mean a missing table
/// row, not a zeroed one.
pub fn parse_teams(records: &[Value]) -> Result<Vec<Team>, IngestError> {
    records.iter().map(parse_team).collect()
}

/// Parse a single raw team record.
pub fn parse_team(record: &Value) -> Result<Team, IngestError> {
    let id = TeamId::new(parse_id(record, "id")?);
    let display_name = record
        .get("display_name")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(IngestError::MissingField("display_name"))?;

    Ok(Team {
        id,
        display_name: display_name.to_string(),
        point_adjustment: coerce_adjustment(record.get("point_adjustment")),
    })
}

fn parse_id(record: &Value, field: &'static str) -> Result<Uuid, IngestError> {
    let raw = record
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or(IngestError::MissingField(field))?;
    Uuid::parse_str(raw.trim()).map_err(|_| IngestError::InvalidId {
        field,
        value: raw.to_string(),
    })
}

/// Number-or-string-or-missing, coerced to a non-negative goal count.
fn coerce_score(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Number-or-string-or-missing round; anything outside the season's
/// weeks reads as unscheduled.
fn coerce_matchweek(value: Option<&Value>, final_matchweek: Matchweek) -> Option<Matchweek> {
    let week = match value {
        Some(Value::Number(n)) => n.as_u64()?,
        Some(Value::String(s)) => s.trim().parse().ok()?,
        _ => return None,
    };
    if (1..=u64::from(final_matchweek.as_u8())).contains(&week) {
        Some(Matchweek::new(week as u8))
    } else {
        None
    }
}

fn coerce_adjustment(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
