//! GearKeep Server - Maintenance Management System
//!
//! A Rust REST API server for maintenance management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearkeep_server::{
    api,
    config::AppConfig,
    identity::ConfiguredIdentity,
    repository::Repository,
    services::Services,
    store::Store,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gearkeep_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GearKeep Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository, hydrate the in-memory store, wire services
    let repository = Repository::new(pool);
    let store = Arc::new(Store::new());
    store
        .hydrate(&repository)
        .await
        .expect("Failed to load entity collections");

    tracing::info!("Entity store hydrated");

    let identity = Arc::new(ConfiguredIdentity::new(&config.identity.default_user));
    let services = Services::new(repository, store, identity);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Teams
        .route("/teams", get(api::teams::list_teams))
        .route("/teams", post(api::teams::create_team))
        .route("/teams/:id", get(api::teams::get_team))
        .route("/teams/:id", put(api::teams::update_team))
        .route("/teams/:id", delete(api::teams::delete_team))
        .route("/teams/:id/members", post(api::teams::add_team_member))
        .route("/teams/:id/members/:name", delete(api::teams::remove_team_member))
        // Work centers
        .route("/work-centers", get(api::work_centers::list_work_centers))
        .route("/work-centers", post(api::work_centers::create_work_center))
        .route("/work-centers/:id", get(api::work_centers::get_work_center))
        .route("/work-centers/:id", put(api::work_centers::update_work_center))
        .route("/work-centers/:id", delete(api::work_centers::delete_work_center))
        // Maintenance requests
        .route("/requests", get(api::requests::list_requests))
        .route("/requests", post(api::requests::create_request))
        .route("/requests/board", get(api::requests::get_board))
        .route("/requests/autofill/equipment/:name", get(api::requests::autofill_equipment))
        .route("/requests/autofill/team/:name", get(api::requests::autofill_team))
        .route("/requests/:id", get(api::requests::get_request))
        .route("/requests/:id", put(api::requests::update_request))
        .route("/requests/:id", delete(api::requests::delete_request))
        .route("/requests/:id/stage", put(api::requests::move_request_stage))
        // Reporting
        .route("/reporting/metrics", get(api::reporting::get_metrics))
        .route("/reporting/charts", get(api::reporting::get_charts))
        .route("/reporting/tracker", get(api::reporting::get_tracker))
        .route("/reporting/equipment-load", get(api::reporting::get_equipment_load))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
