//! In-memory entity store
//!
//! The single authoritative snapshot of all entity collections, hydrated
//! from the repositories at startup. Reads hand out cloned snapshots and
//! never suspend; mutation goes through the owning services (single-writer),
//! which commit here only after the repository write succeeded. A
//! persistence failure therefore leaves the snapshot at its pre-mutation
//! state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::error::AppResult;
use crate::models::{Equipment, MaintenanceRequest, Team, WorkCenter};
use crate::repository::Repository;

#[derive(Default)]
pub struct Store {
    equipment: RwLock<Vec<Equipment>>,
    teams: RwLock<Vec<Team>>,
    work_centers: RwLock<Vec<WorkCenter>>,
    requests: RwLock<Vec<MaintenanceRequest>>,
    /// Per-request-id write locks serializing save/delete for one entity id
    request_locks: Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all collections from the backing repositories.
    pub async fn hydrate(&self, repository: &Repository) -> AppResult<()> {
        let equipment = repository.equipment.list().await?;
        let teams = repository.teams.list().await?;
        let work_centers = repository.work_centers.list().await?;
        let requests = repository.requests.list().await?;

        *self.equipment.write().unwrap() = equipment;
        *self.teams.write().unwrap() = teams;
        *self.work_centers.write().unwrap() = work_centers;
        *self.requests.write().unwrap() = requests;
        Ok(())
    }

    // -- Snapshots ----------------------------------------------------------

    pub fn equipment_snapshot(&self) -> Vec<Equipment> {
        self.equipment.read().unwrap().clone()
    }

    pub fn teams_snapshot(&self) -> Vec<Team> {
        self.teams.read().unwrap().clone()
    }

    pub fn work_centers_snapshot(&self) -> Vec<WorkCenter> {
        self.work_centers.read().unwrap().clone()
    }

    pub fn requests_snapshot(&self) -> Vec<MaintenanceRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_by_id(&self, id: i32) -> Option<MaintenanceRequest> {
        self.requests
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    // -- Committed mutations ------------------------------------------------

    pub fn upsert_equipment(&self, record: Equipment) {
        let mut guard = self.equipment.write().unwrap();
        match guard.iter_mut().find(|e| e.id == record.id) {
            Some(existing) => *existing = record,
            None => guard.push(record),
        }
    }

    pub fn remove_equipment(&self, id: i32) {
        self.equipment.write().unwrap().retain(|e| e.id != id);
    }

    pub fn upsert_team(&self, record: Team) {
        let mut guard = self.teams.write().unwrap();
        match guard.iter_mut().find(|t| t.id == record.id) {
            Some(existing) => *existing = record,
            None => guard.push(record),
        }
    }

    pub fn remove_team(&self, id: i32) {
        self.teams.write().unwrap().retain(|t| t.id != id);
    }

    pub fn upsert_work_center(&self, record: WorkCenter) {
        let mut guard = self.work_centers.write().unwrap();
        match guard.iter_mut().find(|w| w.id == record.id) {
            Some(existing) => *existing = record,
            None => guard.push(record),
        }
    }

    pub fn remove_work_center(&self, id: i32) {
        self.work_centers.write().unwrap().retain(|w| w.id != id);
    }

    pub fn upsert_request(&self, record: MaintenanceRequest) {
        let mut guard = self.requests.write().unwrap();
        match guard.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => guard.push(record),
        }
    }

    pub fn remove_request(&self, id: i32) {
        self.requests.write().unwrap().retain(|r| r.id != id);
    }

    // -- Write serialization ------------------------------------------------

    /// Lock guarding persistence operations for one request id. Two saves
    /// for the same id queue behind each other; saves for different ids run
    /// independently.
    pub fn request_write_lock(&self, id: i32) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.request_locks.lock().unwrap();
        locks.entry(id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(id: i32) -> MaintenanceRequest {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut r = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        r.id = id;
        r.subject = format!("Request {}", id);
        r
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let store = Store::new();
        store.upsert_request(request(1));
        store.upsert_request(request(2));
        assert_eq!(store.requests_snapshot().len(), 2);

        let mut changed = request(1);
        changed.subject = "Changed".to_string();
        store.upsert_request(changed);

        let snapshot = store.requests_snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].subject, "Changed");
    }

    #[test]
    fn test_remove_request() {
        let store = Store::new();
        store.upsert_request(request(1));
        store.remove_request(1);
        assert!(store.request_by_id(1).is_none());
    }

    #[test]
    fn test_write_lock_is_per_id() {
        let store = Store::new();
        let a1 = store.request_write_lock(1);
        let a2 = store.request_write_lock(1);
        let b = store.request_write_lock(2);
        assert!(Arc::ptr_eq(&a1, &a2));
        assert!(!Arc::ptr_eq(&a1, &b));
    }
}
