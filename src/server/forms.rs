//! Form and query payloads accepted by the routes, with their validation.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::{
    cli::types::{Season, Team},
    storage::QuarterbackRecord,
};

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// `POST /addQB` body. Fields arrive as raw strings so every problem can be
/// reported at once instead of failing on the first bad field.
#[derive(Debug, Default, Deserialize)]
pub struct AddQuarterbackForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub touchdowns: String,
    #[serde(default)]
    pub interceptions: String,
    #[serde(default)]
    pub qbr: String,
}

impl AddQuarterbackForm {
    pub fn validate(&self) -> Result<QuarterbackRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
        let team = self.team.trim();
        if team.is_empty() {
            errors.push(FieldError::new("team", "Team is required"));
        }

        let touchdowns = self.touchdowns.trim().parse::<u32>().ok();
        if touchdowns.is_none() {
            errors.push(FieldError::new("touchdowns", "Touchdowns must be a number"));
        }
        let interceptions = self.interceptions.trim().parse::<u32>().ok();
        if interceptions.is_none() {
            errors.push(FieldError::new(
                "interceptions",
                "Interceptions must be a number",
            ));
        }
        let qbr = self
            .qbr
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite());
        if qbr.is_none() {
            errors.push(FieldError::new("qbr", "QBR must be a number"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Same casing as `Team`, so manual records show up in team listings
        Ok(QuarterbackRecord::new(name, team.to_ascii_uppercase())
            .with_stats(touchdowns, interceptions, qbr))
    }
}

/// `POST /searchQB` body.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub name: String,
}

impl SearchForm {
    pub fn validate(&self) -> Result<&str, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation(vec![FieldError::new(
                "name",
                "Name is required",
            )]));
        }
        Ok(name)
    }
}

/// Season and team taken from a query string or path.
#[derive(Debug, Default, Deserialize)]
pub struct SyncParams {
    pub season: Option<String>,
    pub team: Option<String>,
}

impl SyncParams {
    pub fn resolve(&self) -> Result<(Season, Team), ApiError> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match (present(&self.season), present(&self.team)) {
            (Some(season), Some(team)) => Ok((Season::new(&season)?, Team::new(&team)?)),
            _ => Err(ApiError::MissingSeasonOrTeam),
        }
    }
}
