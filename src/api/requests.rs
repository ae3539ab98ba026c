//! Maintenance request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{MaintenanceRequest, SaveMaintenanceRequest, SortDirection, Stage},
    services::reporting::{self, RequestSortKey, StageColumn},
};

use super::current_date;

/// Query parameters for the request list and board views
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RequestListQuery {
    /// Case-insensitive search against subject or equipment name
    #[serde(default)]
    pub search: Option<String>,
    /// Team name filter; "All" (the default) passes every team
    #[serde(default)]
    pub team: Option<String>,
    /// Column to sort by (list view only)
    #[serde(default)]
    pub sort_by: Option<RequestSortKey>,
    /// Sort direction, ascending by default
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

/// Stage move payload (kanban drop)
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveStageRequest {
    pub stage: Stage,
}

/// Derived fields for an equipment selection on the request form
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentAutofill {
    pub equipment: String,
    pub equipment_id: Option<i32>,
    pub category: String,
    pub team: String,
}

/// Derived technician for a team selection on the request form
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamAutofill {
    pub team: String,
    pub technician: String,
}

/// List maintenance requests, filtered and optionally sorted
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestListQuery),
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let snapshot = state.services.workflow.requests();
    let mut requests = reporting::filter_requests(
        &snapshot,
        query.search.as_deref().unwrap_or(""),
        query.team.as_deref().unwrap_or("All"),
    );
    if let Some(key) = query.sort_by {
        requests = reporting::sort_requests(
            requests,
            key,
            query.direction.unwrap_or(SortDirection::Asc),
        );
    }
    Ok(Json(requests))
}

/// Kanban board: requests grouped into the four stage columns
#[utoipa::path(
    get,
    path = "/requests/board",
    tag = "requests",
    params(RequestListQuery),
    responses(
        (status = 200, description = "Requests grouped by stage", body = Vec<StageColumn>)
    )
)]
pub async fn get_board(
    State(state): State<crate::AppState>,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<Vec<StageColumn>>> {
    let board = state.services.reporting.board(
        query.search.as_deref().unwrap_or(""),
        query.team.as_deref().unwrap_or("All"),
    );
    Ok(Json(board))
}

/// Get a maintenance request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.workflow.request_by_id(id)?;
    Ok(Json(request))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = SaveMaintenanceRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveMaintenanceRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let request = state
        .services
        .workflow
        .save(None, data, current_date())
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a maintenance request
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = SaveMaintenanceRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 404, description = "Unknown request", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<SaveMaintenanceRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let request = state
        .services
        .workflow
        .save(Some(id), data, current_date())
        .await?;
    Ok(Json(request))
}

/// Delete a maintenance request (irreversible; the client confirms first)
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 404, description = "Unknown request", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.workflow.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a request to another stage (kanban drop)
#[utoipa::path(
    put,
    path = "/requests/{id}/stage",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = MoveStageRequest,
    responses(
        (status = 200, description = "Request moved", body = MaintenanceRequest),
        (status = 404, description = "Unknown request", body = crate::error::ErrorResponse)
    )
)]
pub async fn move_request_stage(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<MoveStageRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state
        .services
        .workflow
        .move_to_stage(id, data.stage, current_date())
        .await?;
    Ok(Json(request))
}

/// Derived fields when an equipment is selected on the form.
///
/// A lookup miss answers with the typed name and no derived data, matching
/// the form's silent no-op.
#[utoipa::path(
    get,
    path = "/requests/autofill/equipment/{name}",
    tag = "requests",
    params(("name" = String, Path, description = "Equipment name")),
    responses(
        (status = 200, description = "Auto-fill values", body = EquipmentAutofill)
    )
)]
pub async fn autofill_equipment(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<EquipmentAutofill>> {
    let draft = state
        .services
        .workflow
        .equipment_selection(&name, current_date());
    Ok(Json(EquipmentAutofill {
        equipment: draft.equipment,
        equipment_id: draft.equipment_id,
        category: draft.category,
        team: draft.team,
    }))
}

/// Derived technician when a team is selected on the form
#[utoipa::path(
    get,
    path = "/requests/autofill/team/{name}",
    tag = "requests",
    params(("name" = String, Path, description = "Team name")),
    responses(
        (status = 200, description = "Auto-fill values", body = TeamAutofill)
    )
)]
pub async fn autofill_team(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<TeamAutofill>> {
    let draft = state.services.workflow.team_selection(&name, current_date());
    Ok(Json(TeamAutofill {
        team: draft.team,
        technician: draft.technician,
    }))
}
