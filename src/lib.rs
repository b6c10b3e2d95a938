//! Quarterback Stats Library
//!
//! Keeps a local store of NFL quarterback season statistics in sync with the
//! SportsDataIO feed, and serves it over a small HTTP API.
//!
//! ## Features
//!
//! - **Upstream Sync**: Fetch season stats for one team and upsert every quarterback by name
//! - **Local Store**: SQLite table with one record per quarterback name
//! - **HTTP Service**: Add, list, search, sync and clear endpoints built on axum
//! - **CLI**: The same operations from the terminal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qb_stats::{QuarterbackDatabase, Reconciler, Season, SportsDataClient, Team};
//!
//! # async fn example() -> qb_stats::Result<()> {
//! let store = Arc::new(QuarterbackDatabase::new_in_memory()?);
//! let source = SportsDataClient::new("https://api.sportsdata.io", "my-api-key")?;
//! let reconciler = Reconciler::new(source, store.clone());
//!
//! let summary = reconciler
//!     .sync(&Season::new("2023")?, &Team::new("KC")?)
//!     .await?;
//! println!("{} quarterbacks written", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SPORTS_API_KEY=your-key
//! export QB_STATS_DB=/path/to/quarterbacks.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod server;
pub mod sportsdata;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Season, Team};
pub use config::Config;
pub use error::{QbError, Result};
pub use reconcile::{Reconciler, SyncSummary};
pub use sportsdata::SportsDataClient;
pub use storage::{QuarterbackDatabase, QuarterbackRecord};
