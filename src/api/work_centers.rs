//! Work center API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::work_center::{CreateWorkCenter, UpdateWorkCenter, WorkCenter},
};

/// List all work centers
#[utoipa::path(
    get,
    path = "/work-centers",
    tag = "work-centers",
    responses(
        (status = 200, description = "Work center list", body = Vec<WorkCenter>)
    )
)]
pub async fn list_work_centers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<WorkCenter>>> {
    Ok(Json(state.services.work_centers.list()))
}

/// Get work center by ID
#[utoipa::path(
    get,
    path = "/work-centers/{id}",
    tag = "work-centers",
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 200, description = "Work center details", body = WorkCenter)
    )
)]
pub async fn get_work_center(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<WorkCenter>> {
    let work_center = state.services.work_centers.get_by_id(id)?;
    Ok(Json(work_center))
}

/// Create work center
#[utoipa::path(
    post,
    path = "/work-centers",
    tag = "work-centers",
    request_body = CreateWorkCenter,
    responses(
        (status = 201, description = "Work center created", body = WorkCenter)
    )
)]
pub async fn create_work_center(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateWorkCenter>,
) -> AppResult<(StatusCode, Json<WorkCenter>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let work_center = state.services.work_centers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(work_center)))
}

/// Update work center
#[utoipa::path(
    put,
    path = "/work-centers/{id}",
    tag = "work-centers",
    params(("id" = i32, Path, description = "Work center ID")),
    request_body = UpdateWorkCenter,
    responses(
        (status = 200, description = "Work center updated", body = WorkCenter)
    )
)]
pub async fn update_work_center(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateWorkCenter>,
) -> AppResult<Json<WorkCenter>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let work_center = state.services.work_centers.update(id, &data).await?;
    Ok(Json(work_center))
}

/// Delete work center
#[utoipa::path(
    delete,
    path = "/work-centers/{id}",
    tag = "work-centers",
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 204, description = "Work center deleted")
    )
)]
pub async fn delete_work_center(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.work_centers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
