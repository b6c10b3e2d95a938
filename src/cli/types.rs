//! Type-safe wrappers for the identifiers the stats provider is queried with.

use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Longest identifier accepted for either a season or a team.
const MAX_IDENTIFIER_LEN: usize = 16;

fn validate_identifier(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(QbError::invalid_input(field, "must not be empty"));
    }
    if value.len() > MAX_IDENTIFIER_LEN {
        return Err(QbError::invalid_input(
            field,
            format!("must be at most {MAX_IDENTIFIER_LEN} characters"),
        ));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(QbError::invalid_input(
            field,
            format!("'{value}' must contain only letters and digits"),
        ));
    }
    Ok(value.to_string())
}

/// Season identifier as the stats provider spells it.
///
/// Opaque to this crate: `2023`, `2023REG` and `2023POST` are all valid.
/// It is only ever interpolated into a URL path, so it is restricted to
/// ASCII letters and digits.
///
/// # Examples
///
/// ```rust
/// use qb_stats::Season;
///
/// let season: Season = "2023REG".parse().unwrap();
/// assert_eq!(season.as_str(), "2023REG");
/// assert!("2023/../".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Season(String);

impl Season {
    pub fn new(season: &str) -> Result<Self> {
        validate_identifier("season", season).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Season {
    type Error = QbError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

/// Team abbreviation, normalized to upper case (`kc` becomes `KC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Team(String);

impl Team {
    pub fn new(team: &str) -> Result<Self> {
        validate_identifier("team", team).map(|t| Self(t.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Team {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Team {
    type Error = QbError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}
