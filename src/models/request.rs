//! Maintenance request model and worksheet checklist

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{MaintenanceTarget, MaintenanceType, Stage};

/// One checklist entry on a request's worksheet.
///
/// Owned exclusively by its parent request; ids are unique within that
/// request and items are never shared or soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorksheetItem {
    pub id: Uuid,
    pub title: String,
    pub is_done: bool,
}

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    pub created_by: String,
    /// Which of equipment / work_center is the active target
    pub maintenance_for: MaintenanceTarget,
    /// Equipment name, denormalized at selection time
    pub equipment: String,
    /// Id snapshot of the selected equipment, when the lookup matched
    pub equipment_id: Option<i32>,
    /// Work center name when the target is a work center
    pub work_center: String,
    /// Derived from the equipment when the target is Equipment, user-set
    /// otherwise
    pub category: String,
    pub request_date: NaiveDate,
    pub created_date: NaiveDate,
    pub maintenance_type: MaintenanceType,
    pub team: String,
    pub technician: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    /// Expected duration as "HH:MM" text
    pub duration: String,
    /// 1..=3, rendered as that many stars
    pub priority: i16,
    pub company: String,
    pub stage: Stage,
    /// Date the request entered Repaired; cleared if it leaves again.
    /// Backs the average-resolution-time metric.
    pub completed_date: Option<NaiveDate>,
    pub notes: String,
    pub instructions: String,
    #[sqlx(json)]
    pub worksheet: Vec<WorksheetItem>,
}

impl MaintenanceRequest {
    /// Fresh draft with the form defaults: today's dates, stage New,
    /// priority 2, zero duration.
    pub fn new_draft(today: NaiveDate, created_by: &str) -> Self {
        Self {
            id: 0,
            subject: String::new(),
            created_by: created_by.to_string(),
            maintenance_for: MaintenanceTarget::Equipment,
            equipment: String::new(),
            equipment_id: None,
            work_center: String::new(),
            category: String::new(),
            request_date: today,
            created_date: today,
            maintenance_type: MaintenanceType::Corrective,
            team: String::new(),
            technician: String::new(),
            scheduled_date: None,
            scheduled_time: None,
            duration: "00:00".to_string(),
            priority: 2,
            company: String::new(),
            stage: Stage::New,
            completed_date: None,
            notes: String::new(),
            instructions: String::new(),
            worksheet: Vec::new(),
        }
    }

    // -- Worksheet checklist ------------------------------------------------

    /// Append a new empty checklist item and return its id.
    pub fn add_worksheet_item(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.worksheet.push(WorksheetItem {
            id,
            title: String::new(),
            is_done: false,
        });
        id
    }

    /// Replace an item's title, keeping its done state. Unknown ids are a
    /// silent no-op.
    pub fn update_worksheet_title(&mut self, item_id: Uuid, title: &str) {
        if let Some(item) = self.worksheet.iter_mut().find(|i| i.id == item_id) {
            item.title = title.to_string();
        }
    }

    /// Flip an item's done state. Unknown ids are a silent no-op.
    pub fn toggle_worksheet_item(&mut self, item_id: Uuid) {
        if let Some(item) = self.worksheet.iter_mut().find(|i| i.id == item_id) {
            item.is_done = !item.is_done;
        }
    }

    /// Remove an item permanently. Unknown ids are a silent no-op.
    pub fn remove_worksheet_item(&mut self, item_id: Uuid) {
        self.worksheet.retain(|i| i.id != item_id);
    }

    pub fn completed_count(&self) -> usize {
        self.worksheet.iter().filter(|i| i.is_done).count()
    }

    pub fn total_count(&self) -> usize {
        self.worksheet.len()
    }
}

/// Form payload for creating or updating a request.
///
/// Dates and identity default server-side; the worksheet travels with the
/// form since checklist edits are saved wholesale with the request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveMaintenanceRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub maintenance_for: MaintenanceTarget,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub equipment_id: Option<i32>,
    #[serde(default)]
    pub work_center: String,
    #[serde(default)]
    pub category: String,
    /// Defaults to today when omitted
    pub request_date: Option<NaiveDate>,
    pub maintenance_type: MaintenanceType,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub technician: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default = "default_priority")]
    #[validate(range(min = 1, max = 3, message = "Priority must be 1, 2 or 3"))]
    pub priority: i16,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub worksheet: Vec<WorksheetItem>,
}

fn default_duration() -> String {
    "00:00".to_string()
}

fn default_priority() -> i16 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_add_toggle_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut req = MaintenanceRequest::new_draft(today, "Mitchell Admin");

        let first = req.add_worksheet_item();
        req.toggle_worksheet_item(first);
        req.add_worksheet_item();

        assert_eq!(req.completed_count(), 1);
        assert_eq!(req.total_count(), 2);
    }

    #[test]
    fn test_worksheet_ids_unique() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut req = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        let a = req.add_worksheet_item();
        let b = req.add_worksheet_item();
        assert_ne!(a, b);
    }

    #[test]
    fn test_worksheet_missing_id_is_noop() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut req = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        let id = req.add_worksheet_item();
        req.update_worksheet_title(id, "Check oil level");

        let ghost = Uuid::new_v4();
        req.update_worksheet_title(ghost, "nope");
        req.toggle_worksheet_item(ghost);
        req.remove_worksheet_item(ghost);

        assert_eq!(req.worksheet.len(), 1);
        assert_eq!(req.worksheet[0].title, "Check oil level");
        assert!(!req.worksheet[0].is_done);
    }

    #[test]
    fn test_update_title_preserves_done() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut req = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        let id = req.add_worksheet_item();
        req.toggle_worksheet_item(id);
        req.update_worksheet_title(id, "Grease bearings");
        assert!(req.worksheet[0].is_done);
        assert_eq!(req.worksheet[0].title, "Grease bearings");
    }

    #[test]
    fn test_remove_is_permanent() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut req = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        let id = req.add_worksheet_item();
        req.remove_worksheet_item(id);
        assert_eq!(req.total_count(), 0);
    }

    #[test]
    fn test_draft_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let req = MaintenanceRequest::new_draft(today, "Mitchell Admin");
        assert_eq!(req.stage, Stage::New);
        assert_eq!(req.priority, 2);
        assert_eq!(req.duration, "00:00");
        assert_eq!(req.request_date, today);
        assert_eq!(req.created_date, today);
        assert!(req.worksheet.is_empty());
    }
}
