//! Raw ledger records through ingestion into ranked tables.

use serde_json::json;
use titlerace::{ingest, EngineConfig, Matchweek, StandingsService, TeamId};
use uuid::Uuid;

const TEAM_A: &str = "00000000-0000-0000-0000-000000000001";
const TEAM_B: &str = "00000000-0000-0000-0000-000000000002";

fn team_id(raw: &str) -> TeamId {
    TeamId::new(Uuid::parse_str(raw).unwrap())
}

/// The canonical two-team scenario: A beats B 2-0 in week 1, they draw
/// 1-1 in week 2, and B carries a three-point deduction.
fn raw_ledger() -> (Vec<serde_json::Value>, Vec<serde_json::Value>) {
    let matches = vec![
        json!({
            "id": "00000000-0000-0000-0000-000000000100",
            "home_team_id": TEAM_A,
            "away_team_id": TEAM_B,
            "home_score": 2,
            "away_score": 0,
            "matchweek": 1
        }),
        json!({
            "id": "00000000-0000-0000-0000-000000000101",
            "home_team_id": TEAM_B,
            "away_team_id": TEAM_A,
            "home_score": "1",
            "away_score": "1",
            "matchweek": "2"
        }),
    ];
    let teams = vec![
        json!({"id": TEAM_A, "display_name": "Alpha", "point_adjustment": 0}),
        json!({"id": TEAM_B, "display_name": "Beta", "point_adjustment": -3}),
    ];
    (matches, teams)
}

#[test]
fn test_two_team_scenario_end_to_end() {
    let (raw_matches, raw_teams) = raw_ledger();
    let final_matchweek = Matchweek::new(38);
    let matches = ingest::parse_matches(&raw_matches, final_matchweek);
    let teams = ingest::parse_teams(&raw_teams).unwrap();
    let service = StandingsService::new(EngineConfig::default());

    let week1 = service.table(&matches, &teams, 1).unwrap();
    let a = week1.row(team_id(TEAM_A)).unwrap();
    assert_eq!((a.played, a.won, a.points), (1, 1, 3));
    let b = week1.row(team_id(TEAM_B)).unwrap();
    assert_eq!((b.played, b.lost, b.points), (1, 1, -3));

    let week2 = service.table(&matches, &teams, 2).unwrap();
    let a = week2.row(team_id(TEAM_A)).unwrap();
    assert_eq!((a.played, a.won, a.drawn, a.points), (2, 1, 1, 4));
    let b = week2.row(team_id(TEAM_B)).unwrap();
    assert_eq!((b.played, b.drawn, b.lost, b.points), (2, 1, 1, -2));
}

#[test]
fn test_malformed_fields_flow_through_as_defaults() {
    let final_matchweek = Matchweek::new(38);
    let raw_matches = vec![json!({
        "id": "00000000-0000-0000-0000-000000000100",
        "home_team_id": TEAM_A,
        "away_team_id": TEAM_B,
        "home_score": "two",
        "matchweek": 1
    })];
    let raw_teams = vec![
        json!({"id": TEAM_A, "display_name": "Alpha"}),
        json!({"id": TEAM_B, "display_name": "Beta"}),
    ];
    let matches = ingest::parse_matches(&raw_matches, final_matchweek);
    let teams = ingest::parse_teams(&raw_teams).unwrap();
    let service = StandingsService::new(EngineConfig::default());

    // Both scores coerced to 0: the match counts as a goalless draw.
    let week1 = service.table(&matches, &teams, 1).unwrap();
    assert_eq!(week1.row(team_id(TEAM_A)).unwrap().drawn, 1);
    assert_eq!(week1.row(team_id(TEAM_B)).unwrap().points, 1);
}

#[test]
fn test_unscheduled_raw_match_never_reaches_a_table() {
    let final_matchweek = Matchweek::new(38);
    let raw_matches = vec![json!({
        "id": "00000000-0000-0000-0000-000000000100",
        "home_team_id": TEAM_A,
        "away_team_id": TEAM_B,
        "home_score": 4,
        "away_score": 0,
        "matchweek": "TBD"
    })];
    let raw_teams = vec![
        json!({"id": TEAM_A, "display_name": "Alpha"}),
        json!({"id": TEAM_B, "display_name": "Beta"}),
    ];
    let matches = ingest::parse_matches(&raw_matches, final_matchweek);
    let teams = ingest::parse_teams(&raw_teams).unwrap();
    let service = StandingsService::new(EngineConfig::default());

    let final_table = service.table(&matches, &teams, 38).unwrap();
    assert!(final_table.rows.iter().all(|r| r.played == 0));
}

#[test]
fn test_duplicate_raw_records_collapse_to_first() {
    let final_matchweek = Matchweek::new(38);
    let duplicate = json!({
        "id": "00000000-0000-0000-0000-000000000100",
        "home_team_id": TEAM_A,
        "away_team_id": TEAM_B,
        "home_score": 1,
        "away_score": 0,
        "matchweek": 1
    });
    let mut contradicting = duplicate.clone();
    contradicting["home_score"] = json!(0);
    contradicting["away_score"] = json!(5);
    let raw_teams = vec![
        json!({"id": TEAM_A, "display_name": "Alpha"}),
        json!({"id": TEAM_B, "display_name": "Beta"}),
    ];

    let matches = ingest::parse_matches(&[duplicate, contradicting], final_matchweek);
    let teams = ingest::parse_teams(&raw_teams).unwrap();
    let service = StandingsService::new(EngineConfig::default());

    let week1 = service.table(&matches, &teams, 1).unwrap();
    let a = week1.row(team_id(TEAM_A)).unwrap();
    assert_eq!((a.played, a.won, a.goals_for), (1, 1, 1));
}
