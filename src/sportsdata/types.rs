use crate::storage::QuarterbackRecord;
use serde::{Deserialize, Serialize};


/// Position tag the provider uses for quarterbacks.
pub const QUARTERBACK_POSITION: &str = "QB";

/// Team stored for players the provider lists without a team.
pub const FREE_AGENT_TEAM: &str = "FA";

/// Player entry as returned by `PlayerSeasonStatsByTeam` and `Players`.
///
/// Only the fields this service reads are modelled. The `Players` endpoint
/// carries no stat columns at all, so every stat is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSeasonStats {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Position", default)]
    pub position: Option<String>,
    #[serde(rename = "PassingTouchdowns", default)]
    pub passing_touchdowns: Option<f64>,
    #[serde(rename = "Interceptions", default)]
    pub interceptions: Option<f64>,
    #[serde(rename = "QuarterbackRating", default)]
    pub quarterback_rating: Option<f64>,
}

impl PlayerSeasonStats {
    pub fn is_quarterback(&self) -> bool {
        self.position.as_deref() == Some(QUARTERBACK_POSITION)
    }

    /// Case-insensitive substring match on the player's name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&fragment))
    }

    /// Convert to a storable record. `None` when the entry has no usable name.
    ///
    /// The name is the upsert key and is kept exactly as the provider sent it.
    pub fn to_record(&self) -> Option<QuarterbackRecord> {
        let name = self.name.as_deref().filter(|n| !n.trim().is_empty())?;
        let team = self
            .team
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(FREE_AGENT_TEAM);

        Some(QuarterbackRecord::new(name, team).with_stats(
            stat_count(self.passing_touchdowns),
            stat_count(self.interceptions),
            stat_rating(self.quarterback_rating),
        ))
    }
}

/// Counts arrive as floats (`28.0`). Rounded to the nearest integer;
/// missing, negative or non-finite values are unknown.
pub fn stat_count(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v.round() as u32)
}

/// Ratings are kept as-is when finite.
pub fn stat_rating(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
