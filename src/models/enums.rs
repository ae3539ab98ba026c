//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Workflow position of a maintenance request.
///
/// The order is a display progression (stepper, progress bar); the transition
/// relation itself lives in the workflow engine and is table-driven.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[repr(i16)]
pub enum Stage {
    New = 0,
    #[serde(rename = "In Progress")]
    InProgress = 1,
    Repaired = 2,
    Scrap = 3,
}

impl Stage {
    /// All stages in display order. Kanban columns and breakdown buckets
    /// iterate this, so empty buckets are always present.
    pub const ALL: [Stage; 4] = [Stage::New, Stage::InProgress, Stage::Repaired, Stage::Scrap];

    /// Position in the display progression. Rendering only, never used for
    /// transition validation.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stages that close a request for overdue and workload purposes.
    pub fn is_closed(self) -> bool {
        matches!(self, Stage::Repaired | Stage::Scrap)
    }
}

impl From<i16> for Stage {
    fn from(v: i16) -> Self {
        match v {
            1 => Stage::InProgress,
            2 => Stage::Repaired,
            3 => Stage::Scrap,
            _ => Stage::New,
        }
    }
}

impl From<Stage> for i16 {
    fn from(s: Stage) -> Self {
        s as i16
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::New => "New",
            Stage::InProgress => "In Progress",
            Stage::Repaired => "Repaired",
            Stage::Scrap => "Scrap",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Corrective vs preventive maintenance
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[repr(i16)]
pub enum MaintenanceType {
    Corrective = 0,
    Preventive = 1,
}

impl From<i16> for MaintenanceType {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceType::Preventive,
            _ => MaintenanceType::Corrective,
        }
    }
}

impl From<MaintenanceType> for i16 {
    fn from(t: MaintenanceType) -> Self {
        t as i16
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Corrective => "Corrective",
            MaintenanceType::Preventive => "Preventive",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceTarget
// ---------------------------------------------------------------------------

/// What a request is filed against. Selects exactly one of the
/// equipment / work_center fields as the active target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[repr(i16)]
pub enum MaintenanceTarget {
    Equipment = 0,
    #[serde(rename = "Work Center")]
    WorkCenter = 1,
}

impl From<i16> for MaintenanceTarget {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceTarget::WorkCenter,
            _ => MaintenanceTarget::Equipment,
        }
    }
}

impl From<MaintenanceTarget> for i16 {
    fn from(t: MaintenanceTarget) -> Self {
        t as i16
    }
}

impl std::fmt::Display for MaintenanceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceTarget::Equipment => "Equipment",
            MaintenanceTarget::WorkCenter => "Work Center",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

/// Two-way sort direction for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from(i16::from(stage)), stage);
        }
    }

    #[test]
    fn test_stage_index_order() {
        assert_eq!(Stage::New.index(), 0);
        assert_eq!(Stage::InProgress.index(), 1);
        assert_eq!(Stage::Repaired.index(), 2);
        assert_eq!(Stage::Scrap.index(), 3);
    }

    #[test]
    fn test_stage_closed() {
        assert!(!Stage::New.is_closed());
        assert!(!Stage::InProgress.is_closed());
        assert!(Stage::Repaired.is_closed());
        assert!(Stage::Scrap.is_closed());
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::InProgress.to_string(), "In Progress");
        assert_eq!(
            serde_json::to_string(&Stage::InProgress).unwrap(),
            "\"In Progress\""
        );
    }
}
