//! Runtime configuration read from the environment (and `.env`, loaded by the binary).

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::{
    error::{QbError, Result},
    sportsdata::SPORTSDATA_BASE_URL,
    storage::QuarterbackDatabase,
};

pub const API_KEY_ENV_VAR: &str = "SPORTS_API_KEY";
pub const API_BASE_URL_ENV_VAR: &str = "SPORTS_API_BASE_URL";
pub const HOST_ENV_VAR: &str = "HOST";
pub const PORT_ENV_VAR: &str = "PORT";
pub const DATABASE_PATH_ENV_VAR: &str = "QB_STATS_DB";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub database_path: PathBuf,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var(PORT_ENV_VAR) {
            Some(raw) => parse_value(PORT_ENV_VAR, &raw)?,
            None => DEFAULT_PORT,
        };

        let database_path = var(DATABASE_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let path = QuarterbackDatabase::default_path();
                info!("{DATABASE_PATH_ENV_VAR} not set, using default: {}", path.display());
                path
            });

        Ok(Self {
            host: var(HOST_ENV_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key: var(API_KEY_ENV_VAR),
            api_base_url: var(API_BASE_URL_ENV_VAR)
                .unwrap_or_else(|| SPORTSDATA_BASE_URL.to_string()),
            database_path,
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| QbError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: Display,
{
    raw.parse().map_err(|e| QbError::Config {
        message: format!("Invalid {key} value '{raw}': {e}"),
    })
}
