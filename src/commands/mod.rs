//! Command implementations for the qb-stats binary

pub mod records;
pub mod serve;
pub mod sync;


use std::fmt::Display;
use std::sync::Arc;

use tracing::debug;

use crate::{config::Config, storage::QuarterbackDatabase, QuarterbackRecord, Result};

/// Resources shared by every command: configuration and the opened store.
pub struct CommandContext {
    pub config: Config,
    pub store: Arc<QuarterbackDatabase>,
}

impl CommandContext {
    pub fn new(config: Config) -> Result<Self> {
        debug!(path = %config.database_path.display(), "connecting to database");
        let store = Arc::new(QuarterbackDatabase::open(&config.database_path)?);
        Ok(Self { config, store })
    }
}

/// Placeholder shown for unknown stats.
pub const UNKNOWN_STAT: &str = "N/A";

fn stat_or_unknown<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN_STAT.to_string())
}

/// One aligned text line per record.
pub fn format_record_line(record: &QuarterbackRecord) -> String {
    format!(
        "{:<24} {:<4} TD {:>4}  INT {:>4}  QBR {:>6}",
        record.name,
        record.team,
        stat_or_unknown(record.touchdowns),
        stat_or_unknown(record.interceptions),
        stat_or_unknown(record.qbr.map(|q| format!("{q:.1}"))),
    )
}

pub fn print_records(records: &[QuarterbackRecord], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No quarterbacks stored.");
        return Ok(());
    }

    for record in records {
        println!("{}", format_record_line(record));
    }
    Ok(())
}
