//! Team API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, Team, UpdateTeam},
    models::SortDirection,
    services::reporting::{self, TeamSortKey},
};

/// Membership change payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberRequest {
    pub name: String,
}

/// Query parameters for the team list
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TeamListQuery {
    /// Case-insensitive search against team name or member names
    #[serde(default)]
    pub search: Option<String>,
    /// Column to sort by; members compares by roster size
    #[serde(default)]
    pub sort_by: Option<TeamSortKey>,
    /// Sort direction, ascending by default
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

/// List teams, filtered and optionally sorted
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    params(TeamListQuery),
    responses(
        (status = 200, description = "Team list", body = Vec<Team>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
    Query(query): Query<TeamListQuery>,
) -> AppResult<Json<Vec<Team>>> {
    let snapshot = state.services.teams.list();
    let mut teams = reporting::filter_teams(&snapshot, query.search.as_deref().unwrap_or(""));
    if let Some(key) = query.sort_by {
        teams = reporting::sort_teams(teams, key, query.direction.unwrap_or(SortDirection::Asc));
    }
    Ok(Json(teams))
}

/// Get team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = Team)
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Team>> {
    let team = state.services.teams.get_by_id(id)?;
    Ok(Json(team))
}

/// Create team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = Team)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let team = state.services.teams.create(&data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Update team
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Team updated", body = Team)
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let team = state.services.teams.update(id, &data).await?;
    Ok(Json(team))
}

/// Delete team
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted")
    )
)]
pub async fn delete_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a member to a team roster
#[utoipa::path(
    post,
    path = "/teams/{id}/members",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member added", body = Team)
    )
)]
pub async fn add_team_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<MemberRequest>,
) -> AppResult<Json<Team>> {
    let team = state.services.teams.add_member(id, &data.name).await?;
    Ok(Json(team))
}

/// Remove a member from a team roster
#[utoipa::path(
    delete,
    path = "/teams/{id}/members/{name}",
    tag = "teams",
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("name" = String, Path, description = "Member name")
    ),
    responses(
        (status = 200, description = "Member removed", body = Team)
    )
)]
pub async fn remove_team_member(
    State(state): State<crate::AppState>,
    Path((id, name)): Path<(i32, String)>,
) -> AppResult<Json<Team>> {
    let team = state.services.teams.remove_member(id, &name).await?;
    Ok(Json(team))
}
