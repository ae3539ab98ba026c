//! Maintenance request workflow engine
//!
//! Owns the request lifecycle: the stage state machine, target auto-fill,
//! save/delete orchestration and overdue derivation. Mutations go through
//! the data-access collaborator first and are committed to the in-memory
//! store only on success, so a failed write leaves the snapshot untouched.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::{
    error::{AppError, AppResult},
    identity::IdentityProvider,
    models::{
        Equipment, MaintenanceRequest, MaintenanceTarget, SaveMaintenanceRequest, Stage, Team,
    },
    repository::Repository,
    store::Store,
};

/// Stage transition table.
///
/// The kanban board currently allows dropping a card into any column, so
/// every edge is listed. Forbidding one later (e.g. `Scrap -> New`) is a
/// single line removed here; call sites stay unchanged.
static STAGE_TRANSITIONS: Lazy<HashSet<(Stage, Stage)>> = Lazy::new(|| {
    use Stage::*;
    HashSet::from([
        (New, InProgress),
        (New, Repaired),
        (New, Scrap),
        (InProgress, New),
        (InProgress, Repaired),
        (InProgress, Scrap),
        (Repaired, New),
        (Repaired, InProgress),
        (Repaired, Scrap),
        (Scrap, New),
        (Scrap, InProgress),
        (Scrap, Repaired),
    ])
});

/// Whether a request may move between two stages. Staying put is always
/// permitted (and treated as a no-op by `move_to_stage`).
pub fn can_transition(from: Stage, to: Stage) -> bool {
    from == to || STAGE_TRANSITIONS.contains(&(from, to))
}

/// A request is overdue when it is scheduled, the scheduled date has passed,
/// and it is not already closed. Unscheduled requests are never overdue.
pub fn is_overdue(request: &MaintenanceRequest, today: NaiveDate) -> bool {
    match request.scheduled_date {
        Some(scheduled) => scheduled < today && !request.stage.is_closed(),
        None => false,
    }
}

/// Apply an equipment selection to a request.
///
/// The typed name is always stored. On an exact match the id is snapshotted
/// and `category`/`team` are copied from the equipment record — a copy, not
/// a live reference, so later equipment edits do not rewrite the request.
/// A lookup miss leaves the derived fields untouched.
pub fn select_equipment(request: &mut MaintenanceRequest, roster: &[Equipment], name: &str) {
    request.equipment = name.to_string();
    if let Some(eq) = roster.iter().find(|e| e.name == name) {
        request.equipment_id = Some(eq.id);
        request.category = eq.category.clone();
        request.team = eq.team.clone();
    }
}

/// Apply a team selection to a request: the technician defaults to the
/// team's first member, or empty when the team is unknown or has no members.
pub fn select_team(request: &mut MaintenanceRequest, teams: &[Team], name: &str) {
    request.team = name.to_string();
    request.technician = teams
        .iter()
        .find(|t| t.name == name)
        .and_then(|t| t.members.first().cloned())
        .unwrap_or_default();
}

/// Engine-level save validation. Field checks the form also enforces, plus
/// the cross-field target invariant.
pub fn validate_request(request: &MaintenanceRequest) -> AppResult<()> {
    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject is required".to_string()));
    }
    match request.maintenance_for {
        MaintenanceTarget::Equipment => {
            if request.equipment.is_empty() {
                return Err(AppError::Validation(
                    "An equipment target requires an equipment".to_string(),
                ));
            }
            if !request.work_center.is_empty() {
                return Err(AppError::Validation(
                    "An equipment target excludes a work center".to_string(),
                ));
            }
        }
        MaintenanceTarget::WorkCenter => {
            if request.work_center.is_empty() {
                return Err(AppError::Validation(
                    "A work center target requires a work center".to_string(),
                ));
            }
            if !request.equipment.is_empty() {
                return Err(AppError::Validation(
                    "A work center target excludes an equipment".to_string(),
                ));
            }
        }
    }
    if !(1..=3).contains(&request.priority) {
        return Err(AppError::Validation(
            "Priority must be 1, 2 or 3".to_string(),
        ));
    }
    Ok(())
}

/// Set a request's stage, maintaining the completion date: entering
/// Repaired stamps it, leaving Repaired clears it.
fn apply_stage(record: &mut MaintenanceRequest, new_stage: Stage, today: NaiveDate) {
    if record.stage == new_stage {
        return;
    }
    if new_stage == Stage::Repaired {
        record.completed_date = Some(today);
    } else if record.stage == Stage::Repaired {
        record.completed_date = None;
    }
    record.stage = new_stage;
}

#[derive(Clone)]
pub struct WorkflowService {
    repository: Repository,
    store: Arc<Store>,
    identity: Arc<dyn IdentityProvider>,
}

impl WorkflowService {
    pub fn new(
        repository: Repository,
        store: Arc<Store>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            repository,
            store,
            identity,
        }
    }

    /// Current request collection snapshot (never suspends).
    pub fn requests(&self) -> Vec<MaintenanceRequest> {
        self.store.requests_snapshot()
    }

    pub fn request_by_id(&self, id: i32) -> AppResult<MaintenanceRequest> {
        self.store
            .request_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Maintenance request {} not found", id)))
    }

    /// Create or update a request. `id = None` creates (the repository
    /// assigns the id); otherwise the existing record is replaced. Nothing
    /// is mutated when validation fails, and a persistence failure leaves
    /// the in-memory snapshot at its pre-mutation state.
    ///
    /// Runs detached: a client disconnect cannot cancel the write once it
    /// started, so repository and snapshot cannot diverge mid-flight.
    pub async fn save(
        &self,
        id: Option<i32>,
        data: SaveMaintenanceRequest,
        today: NaiveDate,
    ) -> AppResult<MaintenanceRequest> {
        let service = self.clone();
        tokio::spawn(async move { service.do_save(id, data, today).await })
            .await
            .map_err(|e| AppError::Internal(format!("Save task failed: {}", e)))?
    }

    async fn do_save(
        &self,
        id: Option<i32>,
        data: SaveMaintenanceRequest,
        today: NaiveDate,
    ) -> AppResult<MaintenanceRequest> {
        match id {
            None => {
                let record = self.build_record(None, &data, today);
                validate_request(&record)?;
                let created = self.repository.requests.create(&record).await?;
                self.store.upsert_request(created.clone());
                Ok(created)
            }
            Some(id) => {
                let lock = self.store.request_write_lock(id);
                let _guard = lock.lock().await;

                let existing = self.request_by_id(id)?;
                let record = self.build_record(Some(&existing), &data, today);
                validate_request(&record)?;
                let updated = self.repository.requests.update(id, &record).await?;
                self.store.upsert_request(updated.clone());
                Ok(updated)
            }
        }
    }

    /// Move a request to another kanban column.
    ///
    /// Idempotent: a move to the current stage returns the request without
    /// touching the repository. Unknown ids fail with NotFound.
    pub async fn move_to_stage(
        &self,
        id: i32,
        new_stage: Stage,
        today: NaiveDate,
    ) -> AppResult<MaintenanceRequest> {
        let service = self.clone();
        tokio::spawn(async move { service.do_move_to_stage(id, new_stage, today).await })
            .await
            .map_err(|e| AppError::Internal(format!("Stage move task failed: {}", e)))?
    }

    async fn do_move_to_stage(
        &self,
        id: i32,
        new_stage: Stage,
        today: NaiveDate,
    ) -> AppResult<MaintenanceRequest> {
        let lock = self.store.request_write_lock(id);
        let _guard = lock.lock().await;

        let mut record = self.request_by_id(id)?;
        if record.stage == new_stage {
            return Ok(record);
        }
        if !can_transition(record.stage, new_stage) {
            return Err(AppError::Validation(format!(
                "Transition {} -> {} is not allowed",
                record.stage, new_stage
            )));
        }

        apply_stage(&mut record, new_stage, today);
        let updated = self.repository.requests.update(id, &record).await?;
        self.store.upsert_request(updated.clone());
        Ok(updated)
    }

    /// Delete a request permanently. Confirmation is the caller's
    /// precondition; there is no undo.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let service = self.clone();
        tokio::spawn(async move { service.do_delete(id).await })
            .await
            .map_err(|e| AppError::Internal(format!("Delete task failed: {}", e)))?
    }

    async fn do_delete(&self, id: i32) -> AppResult<()> {
        let lock = self.store.request_write_lock(id);
        let _guard = lock.lock().await;

        if self.store.request_by_id(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Maintenance request {} not found",
                id
            )));
        }
        self.repository.requests.delete(id).await?;
        self.store.remove_request(id);
        Ok(())
    }

    /// Draft carrying the derived fields for an equipment selection, for
    /// the form auto-fill endpoint.
    pub fn equipment_selection(&self, name: &str, today: NaiveDate) -> MaintenanceRequest {
        let mut draft = MaintenanceRequest::new_draft(today, &self.identity.current_user_name());
        select_equipment(&mut draft, &self.store.equipment_snapshot(), name);
        draft
    }

    /// Draft carrying the derived technician for a team selection.
    pub fn team_selection(&self, name: &str, today: NaiveDate) -> MaintenanceRequest {
        let mut draft = MaintenanceRequest::new_draft(today, &self.identity.current_user_name());
        select_team(&mut draft, &self.store.teams_snapshot(), name);
        draft
    }

    /// Merge a form payload over the existing record (or a fresh draft).
    fn build_record(
        &self,
        existing: Option<&MaintenanceRequest>,
        data: &SaveMaintenanceRequest,
        today: NaiveDate,
    ) -> MaintenanceRequest {
        let mut record = match existing {
            Some(r) => r.clone(),
            None => MaintenanceRequest::new_draft(today, &self.identity.current_user_name()),
        };
        record.subject = data.subject.clone();
        record.maintenance_for = data.maintenance_for;
        record.equipment = data.equipment.clone();
        record.equipment_id = data.equipment_id;
        record.work_center = data.work_center.clone();
        record.category = data.category.clone();
        if let Some(request_date) = data.request_date {
            record.request_date = request_date;
        }
        record.maintenance_type = data.maintenance_type;
        record.team = data.team.clone();
        record.technician = data.technician.clone();
        record.scheduled_date = data.scheduled_date;
        record.scheduled_time = data.scheduled_time;
        record.duration = data.duration.clone();
        record.priority = data.priority;
        record.company = data.company.clone();
        if let Some(stage) = data.stage {
            apply_stage(&mut record, stage, today);
        }
        record.notes = data.notes.clone();
        record.instructions = data.instructions.clone();
        record.worksheet = data.worksheet.clone();
        record
    }
}
