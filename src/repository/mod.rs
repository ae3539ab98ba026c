//! Repository layer — data-access collaborators per entity type
//!
//! Each entity has an async trait (list/create/update/delete) and a
//! PostgreSQL implementation. The engine only sees the traits, so tests
//! substitute mocks and the persistence format stays a collaborator concern.

pub mod equipment;
pub mod requests;
pub mod teams;
pub mod work_centers;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use equipment::EquipmentRepository;
pub use requests::RequestsRepository;
pub use teams::TeamsRepository;
pub use work_centers::WorkCentersRepository;

/// Container bundling the per-entity data-access collaborators
#[derive(Clone)]
pub struct Repository {
    pub equipment: Arc<dyn EquipmentRepository>,
    pub teams: Arc<dyn TeamsRepository>,
    pub work_centers: Arc<dyn WorkCentersRepository>,
    pub requests: Arc<dyn RequestsRepository>,
}

impl Repository {
    /// Create a Postgres-backed repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: Arc::new(equipment::PgEquipmentRepository::new(pool.clone())),
            teams: Arc::new(teams::PgTeamsRepository::new(pool.clone())),
            work_centers: Arc::new(work_centers::PgWorkCentersRepository::new(pool.clone())),
            requests: Arc::new(requests::PgRequestsRepository::new(pool)),
        }
    }
}
