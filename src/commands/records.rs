//! Record commands: search, list and clear

use crate::{
    cli::types::Team, sportsdata::SportsDataClient, QuarterbackRecord, Result,
};

use super::{format_record_line, print_records, CommandContext};

/// Local fuzzy match first, then the provider. Provider results are shown
/// but not stored.
pub async fn handle_search(
    ctx: &CommandContext,
    name: &str,
    as_json: bool,
) -> Result<Option<QuarterbackRecord>> {
    let found = match ctx.store.find_by_fuzzy_name(name)? {
        Some(record) => Some(record),
        None => {
            let source = SportsDataClient::from_config(&ctx.config)?;
            source
                .find_player_by_name(name)
                .await?
                .and_then(|player| player.to_record())
        }
    };

    match &found {
        Some(record) if as_json => println!("{}", serde_json::to_string_pretty(record)?),
        Some(record) => println!("{}", format_record_line(record)),
        None => println!("Quarterback not found."),
    }

    Ok(found)
}

pub fn handle_list(
    ctx: &CommandContext,
    team: Option<Team>,
    as_json: bool,
) -> Result<Vec<QuarterbackRecord>> {
    let records = match team {
        Some(team) => ctx.store.list_by_team(team.as_str())?,
        None => ctx.store.list_all()?,
    };

    print_records(&records, as_json)?;
    Ok(records)
}

pub fn handle_clear(ctx: &CommandContext) -> Result<usize> {
    let deleted = ctx.store.delete_all()?;
    println!("✓ Deleted {} quarterback records", deleted);
    Ok(deleted)
}
