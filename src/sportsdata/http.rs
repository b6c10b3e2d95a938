use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{Season, Team},
    config::Config,
    sportsdata::types::PlayerSeasonStats,
    Result,
};


/// Default host of the SportsDataIO API.
pub const SPORTSDATA_BASE_URL: &str = "https://api.sportsdata.io";

/// Path prefix of the NFL stats JSON feeds.
const NFL_STATS_PATH: &str = "v3/nfl/stats/json";

/// Client for the external stats provider.
///
/// Every call is a single GET with no retry, pagination or backoff; the
/// API key travels as the `key` query parameter.
#[derive(Debug, Clone)]
pub struct SportsDataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SportsDataClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("qb-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Build a client from configuration; fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.require_api_key()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All players on `team` for `season`, in provider order.
    pub async fn list_players_by_season_team(
        &self,
        season: &Season,
        team: &Team,
    ) -> Result<Vec<PlayerSeasonStats>> {
        let url = format!(
            "{}/{NFL_STATS_PATH}/PlayerSeasonStatsByTeam/{}/{}",
            self.base_url, season, team
        );
        self.get_json(&url).await
    }

    /// First quarterback in the full player list whose name contains `name`,
    /// ignoring case.
    pub async fn find_player_by_name(&self, name: &str) -> Result<Option<PlayerSeasonStats>> {
        let url = format!("{}/{NFL_STATS_PATH}/Players", self.base_url);
        let players: Vec<PlayerSeasonStats> = self.get_json(&url).await?;

        Ok(players
            .into_iter()
            .find(|p| p.is_quarterback() && p.name_contains(name)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "requesting provider data");

        // The request URL carries the API key, keep it out of error messages
        let body = self
            .fetch(url)
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> reqwest::Result<T> {
        self.client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
