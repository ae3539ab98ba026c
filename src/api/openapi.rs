//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, reporting, requests, teams, work_centers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearKeep API",
        version = "1.0.0",
        description = "Maintenance Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::delete_team,
        teams::add_team_member,
        teams::remove_team_member,
        // Work centers
        work_centers::list_work_centers,
        work_centers::get_work_center,
        work_centers::create_work_center,
        work_centers::update_work_center,
        work_centers::delete_work_center,
        // Maintenance requests
        requests::list_requests,
        requests::get_board,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::delete_request,
        requests::move_request_stage,
        requests::autofill_equipment,
        requests::autofill_team,
        // Reporting
        reporting::get_metrics,
        reporting::get_charts,
        reporting::get_tracker,
        reporting::get_equipment_load,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Teams
            crate::models::team::Team,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            teams::MemberRequest,
            // Work centers
            crate::models::work_center::WorkCenter,
            crate::models::work_center::CreateWorkCenter,
            crate::models::work_center::UpdateWorkCenter,
            // Maintenance requests
            crate::models::enums::Stage,
            crate::models::enums::MaintenanceType,
            crate::models::enums::MaintenanceTarget,
            crate::models::enums::SortDirection,
            crate::models::request::MaintenanceRequest,
            crate::models::request::SaveMaintenanceRequest,
            crate::models::request::WorksheetItem,
            requests::MoveStageRequest,
            requests::EquipmentAutofill,
            requests::TeamAutofill,
            // Reporting
            crate::services::reporting::RequestSortKey,
            crate::services::reporting::TeamSortKey,
            crate::services::reporting::EquipmentSortKey,
            crate::services::reporting::StatEntry,
            crate::services::reporting::StageColumn,
            crate::services::reporting::TrendPoint,
            crate::services::reporting::ReportingMetrics,
            crate::services::reporting::TrackerRow,
            reporting::ChartsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "teams", description = "Maintenance team rosters"),
        (name = "work-centers", description = "Work center management"),
        (name = "requests", description = "Maintenance request workflow"),
        (name = "reporting", description = "Dashboard metrics and chart series")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
