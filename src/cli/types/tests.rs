//! Unit tests for identifier types

use super::*;

#[test]
fn test_season_accepts_plain_year() {
    let season = Season::new("2023").unwrap();
    assert_eq!(season.as_str(), "2023");
    assert_eq!(season.to_string(), "2023");
}

#[test]
fn test_season_keeps_suffix_case() {
    let season: Season = "2023reg".parse().unwrap();
    assert_eq!(season.as_str(), "2023reg");
}

#[test]
fn test_season_trims_whitespace() {
    let season = Season::new("  2024POST ").unwrap();
    assert_eq!(season.as_str(), "2024POST");
}

#[test]
fn test_season_rejects_empty() {
    let err = Season::new("   ").unwrap_err();
    assert_eq!(err.to_string(), "Invalid season: must not be empty");
}

#[test]
fn test_season_rejects_path_characters() {
    assert!(Season::new("2023/KC").is_err());
    assert!(Season::new("../2023").is_err());
    assert!(Season::new("2023?key=x").is_err());
}

#[test]
fn test_season_rejects_overlong_values() {
    let long = "2".repeat(MAX_IDENTIFIER_LEN + 1);
    let err = Season::new(&long).unwrap_err();
    assert!(err.to_string().contains("at most"));
}

#[test]
fn test_team_is_uppercased() {
    let team: Team = "kc".parse().unwrap();
    assert_eq!(team.as_str(), "KC");
    assert_eq!(team.to_string(), "KC");
}

#[test]
fn test_team_rejects_invalid_values() {
    let err = Team::new("").unwrap_err();
    assert!(err.to_string().starts_with("Invalid team"));
    assert!(Team::new("K C").is_err());
}

#[test]
fn test_identifiers_compare_after_normalization() {
    assert_eq!(Team::new("buf").unwrap(), Team::new("BUF").unwrap());
    assert_ne!(Season::new("2023").unwrap(), Season::new("2023REG").unwrap());
}

#[test]
fn test_identifiers_serialize_as_strings() {
    let json = serde_json::to_string(&Team::new("det").unwrap()).unwrap();
    assert_eq!(json, "\"DET\"");
}

#[test]
fn test_identifiers_validate_when_deserialized() {
    let team: Team = serde_json::from_str("\"nyj\"").unwrap();
    assert_eq!(team.as_str(), "NYJ");
    assert!(serde_json::from_str::<Season>("\"20 23\"").is_err());
}
