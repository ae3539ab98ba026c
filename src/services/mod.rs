//! Business logic services

pub mod equipment;
pub mod reporting;
pub mod teams;
pub mod work_centers;
pub mod workflow;

use std::sync::Arc;

use crate::{identity::IdentityProvider, repository::Repository, store::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub teams: teams::TeamsService,
    pub work_centers: work_centers::WorkCentersService,
    pub workflow: workflow::WorkflowService,
    pub reporting: reporting::ReportingService,
}

impl Services {
    /// Create all services sharing one repository, store and identity
    pub fn new(
        repository: Repository,
        store: Arc<Store>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone(), store.clone()),
            teams: teams::TeamsService::new(repository.clone(), store.clone()),
            work_centers: work_centers::WorkCentersService::new(repository.clone(), store.clone()),
            workflow: workflow::WorkflowService::new(repository, store.clone(), identity),
            reporting: reporting::ReportingService::new(store),
        }
    }
}
