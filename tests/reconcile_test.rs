//! Integration tests for provider-to-store sync

use std::sync::Arc;

use qb_stats::{QbError, QuarterbackDatabase, Reconciler, Season, SportsDataClient, Team};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn reconciler_for(server: &MockServer) -> (Reconciler, Arc<QuarterbackDatabase>) {
    let store = Arc::new(QuarterbackDatabase::new_in_memory().unwrap());
    let source = SportsDataClient::new(server.uri(), "integration-key").unwrap();
    (Reconciler::new(source, store.clone()), store)
}

fn team_path(season: &str, team: &str) -> String {
    format!("/v3/nfl/stats/json/PlayerSeasonStatsByTeam/{season}/{team}")
}

#[tokio::test]
async fn test_sync_writes_quarterbacks_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(team_path("2023", "KC")))
        .and(query_param("key", "integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "Name": "Patrick Mahomes",
                "Team": "KC",
                "Position": "QB",
                "PassingTouchdowns": 27.0,
                "Interceptions": 14.0,
                "QuarterbackRating": 92.6
            },
            { "Name": "Blaine Gabbert", "Team": "KC", "Position": "QB" },
            { "Name": "Travis Kelce", "Team": "KC", "Position": "TE", "PassingTouchdowns": 0.0 }
        ])))
        .mount(&server)
        .await;
    let (reconciler, store) = reconciler_for(&server).await;

    let summary = reconciler
        .sync(&Season::new("2023").unwrap(), &Team::new("kc").unwrap())
        .await
        .unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.team.as_str(), "KC");
    assert_eq!(store.count().unwrap(), 2);
    assert!(store.find_by_exact_name("Travis Kelce").unwrap().is_none());

    let mahomes = store.find_by_exact_name("Patrick Mahomes").unwrap().unwrap();
    assert_eq!(mahomes.touchdowns, Some(27));
    assert_eq!(mahomes.interceptions, Some(14));
    assert_eq!(mahomes.qbr, Some(92.6));

    let gabbert = store.find_by_exact_name("Blaine Gabbert").unwrap().unwrap();
    assert_eq!(gabbert.touchdowns, None);
}

#[tokio::test]
async fn test_resync_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(team_path("2023", "MIA")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Name": "Tua Tagovailoa", "Team": "MIA", "Position": "QB", "PassingTouchdowns": 29.0 }
        ])))
        .expect(2)
        .mount(&server)
        .await;
    let (reconciler, store) = reconciler_for(&server).await;
    let season = Season::new("2023").unwrap();
    let team = Team::new("MIA").unwrap();

    reconciler.sync(&season, &team).await.unwrap();
    let first = store.list_all().unwrap();
    reconciler.sync(&season, &team).await.unwrap();

    assert_eq!(store.list_all().unwrap(), first);
}

#[tokio::test]
async fn test_provider_failure_reports_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let (reconciler, store) = reconciler_for(&server).await;

    let err = reconciler
        .sync(&Season::new("2023").unwrap(), &Team::new("KC").unwrap())
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(matches!(err, QbError::UpstreamFetch(_)));
    assert_eq!(store.count().unwrap(), 0);
}
