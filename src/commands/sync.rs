//! `sync` command: the administrative on-demand trigger, without HTTP

use crate::{
    cli::types::{Season, Team},
    reconcile::{Reconciler, SyncSummary},
    sportsdata::SportsDataClient,
    Result,
};

use super::CommandContext;

pub async fn handle_sync(
    ctx: &CommandContext,
    season: Season,
    team: Team,
    as_json: bool,
) -> Result<SyncSummary> {
    let source = SportsDataClient::from_config(&ctx.config)?;
    let reconciler = Reconciler::new(source, ctx.store.clone());

    println!("Fetching {} quarterbacks for season {}...", team, season);
    let summary = reconciler.sync(&season, &team).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("✓ QB data fetched and updated successfully");
        println!("Records written: {}", summary.written);
    }

    Ok(summary)
}
