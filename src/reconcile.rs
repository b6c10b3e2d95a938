//! Reconciliation of provider data into the local record store.
//!
//! [`Reconciler::sync`] fetches every player on a team for a season, keeps
//! the quarterbacks and upserts each one by name. The provider is
//! authoritative: every field of a matching record is overwritten, including
//! stats the provider reports as unknown.
//!
//! A sync is not transactional. A store failure partway through leaves the
//! records written before it in place and stops the batch; a provider
//! failure happens before any write, so the store is left untouched.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn, Span};

use crate::{
    cli::types::{Season, Team},
    sportsdata::{PlayerSeasonStats, SportsDataClient},
    storage::{QuarterbackDatabase, QuarterbackRecord},
    Result,
};


/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncSummary {
    pub season: Season,
    pub team: Team,
    /// Records upserted by this pass.
    pub written: usize,
}

pub struct Reconciler {
    source: SportsDataClient,
    store: Arc<QuarterbackDatabase>,
}

impl Reconciler {
    pub fn new(source: SportsDataClient, store: Arc<QuarterbackDatabase>) -> Self {
        Self { source, store }
    }

    pub fn source(&self) -> &SportsDataClient {
        &self.source
    }

    /// Fetch `team`'s players for `season` and upsert every quarterback.
    #[tracing::instrument(level = "info", skip_all, fields(season = %season, team = %team))]
    pub async fn sync(&self, season: &Season, team: &Team) -> Result<SyncSummary> {
        let players = self
            .source
            .list_players_by_season_team(season, team)
            .await
            .inspect_err(|e| warn!(error = %e, "provider fetch failed"))?;

        let fetched = players.len();
        let quarterbacks = select_quarterbacks(players);
        info!(fetched, quarterbacks = quarterbacks.len(), "provider data received");

        let span = Span::current();
        let written = self
            .store
            .blocking(move |store| {
                let _entered = span.enter();
                upsert_all(store, &quarterbacks)
            })
            .await?;

        info!(written, "sync complete");
        Ok(SyncSummary {
            season: season.clone(),
            team: team.clone(),
            written,
        })
    }
}

/// Upsert in order, stopping at the first failure. Returns the number written.
fn upsert_all(store: &QuarterbackDatabase, records: &[QuarterbackRecord]) -> Result<usize> {
    let mut written = 0;
    for record in records {
        store.upsert_by_name(record).inspect_err(|e| {
            warn!(error = %e, name = %record.name, written, "upsert failed, aborting sync")
        })?;
        written += 1;
    }
    Ok(written)
}

/// Quarterback entries converted to records, in provider order.
///
/// Entries without a usable name cannot be keyed and are skipped.
pub fn select_quarterbacks(players: Vec<PlayerSeasonStats>) -> Vec<QuarterbackRecord> {
    players
        .iter()
        .filter(|p| p.is_quarterback())
        .filter_map(|p| {
            let record = p.to_record();
            if record.is_none() {
                warn!("skipping quarterback entry without a name");
            }
            record
        })
        .collect()
}
