//! External stats provider (SportsDataIO NFL feeds)

pub mod http;
pub mod types;

pub use http::{SportsDataClient, SPORTSDATA_BASE_URL};
pub use types::{PlayerSeasonStats, QUARTERBACK_POSITION};
