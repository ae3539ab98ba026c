//! Work center service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::work_center::{CreateWorkCenter, UpdateWorkCenter, WorkCenter},
    repository::Repository,
    store::Store,
};

#[derive(Clone)]
pub struct WorkCentersService {
    repository: Repository,
    store: Arc<Store>,
}

impl WorkCentersService {
    pub fn new(repository: Repository, store: Arc<Store>) -> Self {
        Self { repository, store }
    }

    pub fn list(&self) -> Vec<WorkCenter> {
        self.store.work_centers_snapshot()
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<WorkCenter> {
        self.store
            .work_centers_snapshot()
            .into_iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    pub async fn create(&self, data: &CreateWorkCenter) -> AppResult<WorkCenter> {
        let created = self.repository.work_centers.create(data).await?;
        self.store.upsert_work_center(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i32, data: &UpdateWorkCenter) -> AppResult<WorkCenter> {
        let mut record = self.get_by_id(id)?;
        if let Some(ref name) = data.name {
            record.name = name.clone();
        }
        let updated = self.repository.work_centers.update(id, &record).await?;
        self.store.upsert_work_center(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id)?;
        self.repository.work_centers.delete(id).await?;
        self.store.remove_work_center(id);
        Ok(())
    }
}
