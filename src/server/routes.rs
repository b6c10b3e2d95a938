use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::error::ApiError;
use super::forms::{AddQuarterbackForm, SearchForm, SyncParams};
use super::AppState;
use crate::{
    cli::types::{Season, Team},
    storage::QuarterbackRecord,
};

/// Where a search result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Local,
    Upstream,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub source: RecordSource,
    pub quarterback: QuarterbackRecord,
}

#[derive(Debug, Serialize)]
pub struct TeamStatsResponse {
    pub season: Season,
    pub team: Team,
    pub written: usize,
    pub quarterbacks: Vec<QuarterbackRecord>,
}

#[derive(Debug, Serialize)]
pub struct AdminFetchResponse {
    pub message: &'static str,
    pub written: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_count: usize,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn add_quarterback(
    State(state): State<AppState>,
    Form(form): Form<AddQuarterbackForm>,
) -> Result<Redirect, ApiError> {
    let record = form.validate().map_err(ApiError::Validation)?;
    let stored = state
        .store
        .blocking(move |store| store.upsert_by_name(&record))
        .await?;
    info!(name = %stored.name, team = %stored.team, "quarterback added");
    Ok(Redirect::to("/viewQBs"))
}

pub async fn view_quarterbacks(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuarterbackRecord>>, ApiError> {
    let records = state.store.blocking(|store| store.list_all()).await?;
    Ok(Json(records))
}

/// Local fuzzy lookup first; on a miss, ask the provider. Provider hits are
/// returned but not stored.
pub async fn search_quarterback(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResponse>, ApiError> {
    let name = form.validate()?.to_string();

    let fragment = name.clone();
    let local = state
        .store
        .blocking(move |store| store.find_by_fuzzy_name(&fragment))
        .await?;
    if let Some(record) = local {
        return Ok(Json(SearchResponse {
            source: RecordSource::Local,
            quarterback: record,
        }));
    }

    let found = state
        .reconciler
        .source()
        .find_player_by_name(&name)
        .await?
        .and_then(|player| player.to_record());

    match found {
        Some(record) => Ok(Json(SearchResponse {
            source: RecordSource::Upstream,
            quarterback: record,
        })),
        None => Err(ApiError::QuarterbackNotFound),
    }
}

pub async fn team_stats(
    State(state): State<AppState>,
    Query(params): Query<SyncParams>,
) -> Result<Json<TeamStatsResponse>, ApiError> {
    let (season, team) = params.resolve()?;
    sync_and_list_team(&state, season, team).await
}

pub async fn team_stats_by_path(
    State(state): State<AppState>,
    Path((season, team)): Path<(String, String)>,
) -> Result<Json<TeamStatsResponse>, ApiError> {
    let params = SyncParams {
        season: Some(season),
        team: Some(team),
    };
    let (season, team) = params.resolve()?;
    sync_and_list_team(&state, season, team).await
}

async fn sync_and_list_team(
    state: &AppState,
    season: Season,
    team: Team,
) -> Result<Json<TeamStatsResponse>, ApiError> {
    let summary = state.reconciler.sync(&season, &team).await?;
    let listed = team.clone();
    let quarterbacks = state
        .store
        .blocking(move |store| store.list_by_team(listed.as_str()))
        .await?;

    Ok(Json(TeamStatsResponse {
        season,
        team,
        written: summary.written,
        quarterbacks,
    }))
}

/// On-demand sync without reading anything back.
pub async fn admin_fetch(
    State(state): State<AppState>,
    Query(params): Query<SyncParams>,
) -> Result<Json<AdminFetchResponse>, ApiError> {
    let (season, team) = params.resolve()?;
    let summary = state.reconciler.sync(&season, &team).await?;

    Ok(Json(AdminFetchResponse {
        message: "QB data fetched and updated successfully.",
        written: summary.written,
    }))
}

pub async fn delete_quarterbacks(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted_count = state.store.blocking(|store| store.delete_all()).await?;
    info!(deleted_count, "quarterback data deleted");
    Ok(Json(DeleteResponse { deleted_count }))
}
