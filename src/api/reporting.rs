//! Reporting dashboard endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    services::reporting::{ReportingMetrics, StatEntry, TrackerRow, TrendPoint},
};

use super::current_date;

/// All chart series for the dashboard in one response
#[derive(Serialize, ToSchema)]
pub struct ChartsResponse {
    /// Requests per stage (bar chart)
    pub status: Vec<StatEntry>,
    /// Requests per priority (bar chart)
    pub priority: Vec<StatEntry>,
    /// Requests per technician (pie chart), first-seen order
    pub workload: Vec<StatEntry>,
    /// Request volume per request date, ascending (area chart)
    pub trend: Vec<TrendPoint>,
}

/// Query parameters for the process tracker
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TrackerQuery {
    /// Maximum number of rows (default 10)
    pub limit: Option<usize>,
}

/// Dashboard KPI scalars
#[utoipa::path(
    get,
    path = "/reporting/metrics",
    tag = "reporting",
    responses(
        (status = 200, description = "KPI values", body = ReportingMetrics)
    )
)]
pub async fn get_metrics(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ReportingMetrics>> {
    Ok(Json(state.services.reporting.metrics(current_date())))
}

/// Chart-ready series for the dashboard
#[utoipa::path(
    get,
    path = "/reporting/charts",
    tag = "reporting",
    responses(
        (status = 200, description = "Chart series", body = ChartsResponse)
    )
)]
pub async fn get_charts(State(state): State<crate::AppState>) -> AppResult<Json<ChartsResponse>> {
    let reporting = &state.services.reporting;
    Ok(Json(ChartsResponse {
        status: reporting.status_chart(),
        priority: reporting.priority_chart(),
        workload: reporting.workload_chart(),
        trend: reporting.trend_chart(),
    }))
}

/// Recent requests for the process tracker table
#[utoipa::path(
    get,
    path = "/reporting/tracker",
    tag = "reporting",
    params(TrackerQuery),
    responses(
        (status = 200, description = "Tracker rows", body = Vec<TrackerRow>)
    )
)]
pub async fn get_tracker(
    State(state): State<crate::AppState>,
    Query(query): Query<TrackerQuery>,
) -> AppResult<Json<Vec<TrackerRow>>> {
    let rows = state
        .services
        .reporting
        .tracker(current_date(), query.limit.unwrap_or(10));
    Ok(Json(rows))
}

/// Open request counts per equipment (equipment list badge)
#[utoipa::path(
    get,
    path = "/reporting/equipment-load",
    tag = "reporting",
    responses(
        (status = 200, description = "Open requests per equipment", body = Vec<StatEntry>)
    )
)]
pub async fn get_equipment_load(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<StatEntry>>> {
    Ok(Json(state.services.reporting.equipment_open_counts()))
}
