//! Query & aggregation engine
//!
//! Pure, read-only derivations over the request collection: kanban board
//! views, chart series and dashboard KPIs. Everything here is deterministic
//! for a given input order; the current date is always an explicit
//! parameter, never read from the wall clock.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Equipment, MaintenanceRequest, SortDirection, Stage, Team};
use crate::services::workflow::is_overdue;
use crate::store::Store;

/// Label/value pair for chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// One kanban column: a stage and its requests in collection order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StageColumn {
    pub stage: Stage,
    pub requests: Vec<MaintenanceRequest>,
}

/// One point of the request-volume trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub requests: i64,
}

/// Dashboard KPI scalars
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportingMetrics {
    pub total_requests: i64,
    /// Mean days from request to repair, over repaired requests only
    pub avg_resolution_days: f64,
    /// Percentage of scheduled requests not currently overdue
    pub compliance_rate: f64,
    /// Priority-3 requests not yet closed
    pub critical_pending: i64,
}

/// Row of the reporting process tracker table
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrackerRow {
    pub id: i32,
    pub equipment: String,
    pub request_date: NaiveDate,
    pub technician: String,
    pub stage: Stage,
    /// Coarse completion percentage derived from the stage
    pub progress: u8,
    pub is_overdue: bool,
}

/// Sortable request list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestSortKey {
    Subject,
    Equipment,
    Category,
    RequestDate,
    ScheduledDate,
    Priority,
    Stage,
    Team,
    Technician,
}

/// Sortable team list columns. Members is array-valued and compares by
/// roster length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSortKey {
    Name,
    Members,
    Specialization,
    Company,
}

/// Sortable equipment list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSortKey {
    Name,
    SerialNumber,
    Category,
    Department,
    Team,
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Search + team filter for the kanban board and request list.
///
/// Case-insensitive substring match against subject or equipment name, and
/// the team filter passes everything when set to "All". Relative order is
/// preserved.
pub fn filter_requests(
    requests: &[MaintenanceRequest],
    search_term: &str,
    team_filter: &str,
) -> Vec<MaintenanceRequest> {
    let needle = search_term.to_lowercase();
    requests
        .iter()
        .filter(|r| {
            let matches_search = r.subject.to_lowercase().contains(&needle)
                || r.equipment.to_lowercase().contains(&needle);
            let matches_team = team_filter == "All" || r.team == team_filter;
            matches_search && matches_team
        })
        .cloned()
        .collect()
}

/// Partition into the four fixed stage buckets, preserving per-bucket
/// order. Stages with no requests still yield their (empty) column.
pub fn group_by_stage(requests: &[MaintenanceRequest]) -> Vec<StageColumn> {
    Stage::ALL
        .into_iter()
        .map(|stage| StageColumn {
            stage,
            requests: requests
                .iter()
                .filter(|r| r.stage == stage)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Stable two-way sort of the request list. Ties keep their original
/// relative order in both directions.
pub fn sort_requests(
    mut requests: Vec<MaintenanceRequest>,
    key: RequestSortKey,
    direction: SortDirection,
) -> Vec<MaintenanceRequest> {
    requests.sort_by(|a, b| {
        let ord = match key {
            RequestSortKey::Subject => a.subject.cmp(&b.subject),
            RequestSortKey::Equipment => a.equipment.cmp(&b.equipment),
            RequestSortKey::Category => a.category.cmp(&b.category),
            RequestSortKey::RequestDate => a.request_date.cmp(&b.request_date),
            RequestSortKey::ScheduledDate => a.scheduled_date.cmp(&b.scheduled_date),
            RequestSortKey::Priority => a.priority.cmp(&b.priority),
            RequestSortKey::Stage => a.stage.index().cmp(&b.stage.index()),
            RequestSortKey::Team => a.team.cmp(&b.team),
            RequestSortKey::Technician => a.technician.cmp(&b.technician),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    requests
}

/// Stable two-way sort of the team list; the members column compares by
/// roster length.
pub fn sort_teams(mut teams: Vec<Team>, key: TeamSortKey, direction: SortDirection) -> Vec<Team> {
    teams.sort_by(|a, b| {
        let ord = match key {
            TeamSortKey::Name => a.name.cmp(&b.name),
            TeamSortKey::Members => a.members.len().cmp(&b.members.len()),
            TeamSortKey::Specialization => a.specialization.cmp(&b.specialization),
            TeamSortKey::Company => a.company.cmp(&b.company),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    teams
}

/// Equipment list search: case-insensitive substring match against name,
/// serial number or category.
pub fn filter_equipment(equipment: &[Equipment], search_term: &str) -> Vec<Equipment> {
    let needle = search_term.to_lowercase();
    equipment
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.serial_number.to_lowercase().contains(&needle)
                || e.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable two-way sort of the equipment list.
pub fn sort_equipment(
    mut equipment: Vec<Equipment>,
    key: EquipmentSortKey,
    direction: SortDirection,
) -> Vec<Equipment> {
    equipment.sort_by(|a, b| {
        let ord = match key {
            EquipmentSortKey::Name => a.name.cmp(&b.name),
            EquipmentSortKey::SerialNumber => a.serial_number.cmp(&b.serial_number),
            EquipmentSortKey::Category => a.category.cmp(&b.category),
            EquipmentSortKey::Department => a.department.cmp(&b.department),
            EquipmentSortKey::Team => a.team.cmp(&b.team),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    equipment
}

/// Team list search: case-insensitive substring match against the team name
/// or any member name.
pub fn filter_teams(teams: &[Team], search_term: &str) -> Vec<Team> {
    let needle = search_term.to_lowercase();
    teams
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.members.iter().any(|m| m.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Requests per technician, unassigned excluded. Entries appear in
/// first-seen order so the pie chart is stable across refreshes.
pub fn technician_workload(requests: &[MaintenanceRequest]) -> IndexMap<String, i64> {
    let mut workload: IndexMap<String, i64> = IndexMap::new();
    for request in requests {
        if request.technician.is_empty() {
            continue;
        }
        *workload.entry(request.technician.clone()).or_insert(0) += 1;
    }
    workload
}

/// Counts for the three fixed priority buckets, zero counts included.
pub fn priority_breakdown(requests: &[MaintenanceRequest]) -> Vec<StatEntry> {
    [(1, "Low (1)"), (2, "Medium (2)"), (3, "High (3)")]
        .into_iter()
        .map(|(priority, label)| StatEntry {
            label: label.to_string(),
            value: requests.iter().filter(|r| r.priority == priority).count() as i64,
        })
        .collect()
}

/// Counts for the four fixed stage buckets, zero counts included.
pub fn status_breakdown(requests: &[MaintenanceRequest]) -> Vec<StatEntry> {
    Stage::ALL
        .into_iter()
        .map(|stage| StatEntry {
            label: stage.to_string(),
            value: requests.iter().filter(|r| r.stage == stage).count() as i64,
        })
        .collect()
}

/// Request volume per request date, ascending by calendar date. Requests
/// sharing a date merge into one point.
pub fn trend_series(requests: &[MaintenanceRequest]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for request in requests {
        *by_date.entry(request.request_date).or_insert(0) += 1;
    }
    by_date
        .into_iter()
        .map(|(date, requests)| TrendPoint { date, requests })
        .collect()
}

/// Open (not yet closed) requests per equipment name, first-seen order.
/// Backs the equipment list badge and the equipment → requests navigation.
pub fn equipment_open_requests(requests: &[MaintenanceRequest]) -> IndexMap<String, i64> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for request in requests {
        if request.equipment.is_empty() || request.stage.is_closed() {
            continue;
        }
        *counts.entry(request.equipment.clone()).or_insert(0) += 1;
    }
    counts
}

/// Coarse completion percentage for the process tracker bar.
pub fn stage_progress(stage: Stage) -> u8 {
    match stage {
        Stage::New => 10,
        Stage::InProgress => 65,
        Stage::Repaired => 100,
        Stage::Scrap => 0,
    }
}

/// Dashboard KPI scalars.
///
/// Average resolution only counts repaired requests carrying a completion
/// date; compliance only counts scheduled requests. Both degrade to a
/// defined value (0 resp. 100) instead of NaN when their input set is
/// empty.
pub fn reporting_metrics(requests: &[MaintenanceRequest], today: NaiveDate) -> ReportingMetrics {
    let resolution_days: Vec<i64> = requests
        .iter()
        .filter(|r| r.stage == Stage::Repaired)
        .filter_map(|r| {
            r.completed_date
                .map(|done| (done - r.request_date).num_days())
        })
        .collect();
    let avg_resolution_days = if resolution_days.is_empty() {
        0.0
    } else {
        resolution_days.iter().sum::<i64>() as f64 / resolution_days.len() as f64
    };

    let scheduled: Vec<&MaintenanceRequest> = requests
        .iter()
        .filter(|r| r.scheduled_date.is_some())
        .collect();
    let compliance_rate = if scheduled.is_empty() {
        100.0
    } else {
        let on_track = scheduled.iter().filter(|r| !is_overdue(r, today)).count();
        on_track as f64 / scheduled.len() as f64 * 100.0
    };

    let critical_pending = requests
        .iter()
        .filter(|r| r.priority == 3 && !r.stage.is_closed())
        .count() as i64;

    ReportingMetrics {
        total_requests: requests.len() as i64,
        avg_resolution_days,
        compliance_rate,
        critical_pending,
    }
}

/// First `limit` requests in collection order, shaped for the process
/// tracker table.
pub fn tracker_rows(
    requests: &[MaintenanceRequest],
    today: NaiveDate,
    limit: usize,
) -> Vec<TrackerRow> {
    requests
        .iter()
        .take(limit)
        .map(|r| TrackerRow {
            id: r.id,
            equipment: r.equipment.clone(),
            request_date: r.request_date,
            technician: r.technician.clone(),
            stage: r.stage,
            progress: stage_progress(r.stage),
            is_overdue: is_overdue(r, today),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Service facade
// ---------------------------------------------------------------------------

/// Read-only reporting views over the current store snapshot
#[derive(Clone)]
pub struct ReportingService {
    store: Arc<Store>,
}

impl ReportingService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Kanban board: filter, then group into the four stage columns.
    pub fn board(&self, search_term: &str, team_filter: &str) -> Vec<StageColumn> {
        let snapshot = self.store.requests_snapshot();
        let filtered = filter_requests(&snapshot, search_term, team_filter);
        group_by_stage(&filtered)
    }

    pub fn metrics(&self, today: NaiveDate) -> ReportingMetrics {
        reporting_metrics(&self.store.requests_snapshot(), today)
    }

    pub fn status_chart(&self) -> Vec<StatEntry> {
        status_breakdown(&self.store.requests_snapshot())
    }

    pub fn priority_chart(&self) -> Vec<StatEntry> {
        priority_breakdown(&self.store.requests_snapshot())
    }

    pub fn workload_chart(&self) -> Vec<StatEntry> {
        technician_workload(&self.store.requests_snapshot())
            .into_iter()
            .map(|(label, value)| StatEntry { label, value })
            .collect()
    }

    pub fn trend_chart(&self) -> Vec<TrendPoint> {
        trend_series(&self.store.requests_snapshot())
    }

    pub fn tracker(&self, today: NaiveDate, limit: usize) -> Vec<TrackerRow> {
        tracker_rows(&self.store.requests_snapshot(), today, limit)
    }

    pub fn equipment_open_counts(&self) -> Vec<StatEntry> {
        equipment_open_requests(&self.store.requests_snapshot())
            .into_iter()
            .map(|(label, value)| StatEntry { label, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaintenanceTarget;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 3, 15)
    }

    fn request(id: i32, subject: &str, equipment: &str, team: &str) -> MaintenanceRequest {
        let mut r = MaintenanceRequest::new_draft(today(), "Mitchell Admin");
        r.id = id;
        r.subject = subject.to_string();
        r.maintenance_for = MaintenanceTarget::Equipment;
        r.equipment = equipment.to_string();
        r.team = team.to_string();
        r
    }

    fn team(name: &str, members: &[&str]) -> Team {
        Team {
            id: 0,
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            specialization: String::new(),
            company: String::new(),
            notes: None,
        }
    }

    // -- Filtering ----------------------------------------------------------

    #[test]
    fn test_filter_matches_subject_or_equipment_case_insensitive() {
        let requests = vec![
            request(1, "Fix hydraulic leak", "Press 01", "Mech"),
            request(2, "Calibrate sensor", "HYDRAULIC pump", "Electrical"),
            request(3, "Replace belt", "Conveyor", "Mech"),
        ];

        let hits = filter_requests(&requests, "hydraulic", "All");
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filter_combines_team_filter() {
        let requests = vec![
            request(1, "Fix leak", "Press 01", "Mech"),
            request(2, "Fix leak", "Press 02", "Electrical"),
        ];

        let hits = filter_requests(&requests, "leak", "Mech");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let all = filter_requests(&requests, "", "All");
        assert_eq!(all.len(), 2);
    }

    // -- Grouping -----------------------------------------------------------

    #[test]
    fn test_group_by_stage_partitions_exactly() {
        let mut requests = vec![
            request(1, "a", "E1", "Mech"),
            request(2, "b", "E2", "Mech"),
            request(3, "c", "E3", "Mech"),
        ];
        requests[1].stage = Stage::InProgress;
        requests[2].stage = Stage::Repaired;

        let columns = group_by_stage(&requests);
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].stage, Stage::New);
        assert_eq!(columns[3].stage, Stage::Scrap);

        // union of the buckets is the input, each exactly once
        let total: usize = columns.iter().map(|c| c.requests.len()).sum();
        assert_eq!(total, requests.len());
        let mut ids: Vec<i32> = columns
            .iter()
            .flat_map(|c| c.requests.iter().map(|r| r.id))
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);

        // empty buckets are present, not omitted
        assert!(columns[3].requests.is_empty());
    }

    // -- Sorting ------------------------------------------------------------

    #[test]
    fn test_sort_reversal_without_ties() {
        let requests = vec![
            request(1, "b", "E1", "Mech"),
            request(2, "c", "E2", "Mech"),
            request(3, "a", "E3", "Mech"),
        ];

        let asc = sort_requests(requests.clone(), RequestSortKey::Subject, SortDirection::Asc);
        let mut desc =
            sort_requests(requests, RequestSortKey::Subject, SortDirection::Desc);
        desc.reverse();
        assert_eq!(
            asc.iter().map(|r| r.id).collect::<Vec<_>>(),
            desc.iter().map(|r| r.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut requests = vec![
            request(1, "same", "E1", "Mech"),
            request(2, "same", "E2", "Mech"),
            request(3, "same", "E3", "Mech"),
        ];
        requests[0].priority = 2;
        requests[1].priority = 2;
        requests[2].priority = 1;

        let asc = sort_requests(requests.clone(), RequestSortKey::Priority, SortDirection::Asc);
        assert_eq!(asc.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);

        // tied elements keep original order in desc as well
        let desc = sort_requests(requests, RequestSortKey::Priority, SortDirection::Desc);
        assert_eq!(desc.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_equipment_matches_serial_and_category() {
        let equipment = vec![
            Equipment {
                id: 1,
                name: "Hydraulic Press".to_string(),
                serial_number: "HP-2201".to_string(),
                category: "Machinery".to_string(),
                department: "Production".to_string(),
                company: String::new(),
                employee: None,
                technician: String::new(),
                team: String::new(),
                notes: None,
            },
            Equipment {
                id: 2,
                name: "Laptop".to_string(),
                serial_number: "LT-9931".to_string(),
                category: "IT Hardware".to_string(),
                department: "Office".to_string(),
                company: String::new(),
                employee: None,
                technician: String::new(),
                team: String::new(),
                notes: None,
            },
        ];

        assert_eq!(filter_equipment(&equipment, "hp-22")[0].id, 1);
        assert_eq!(filter_equipment(&equipment, "it hard")[0].id, 2);
        assert_eq!(filter_equipment(&equipment, "").len(), 2);
    }

    #[test]
    fn test_filter_teams_matches_members() {
        let teams = vec![team("Mech", &["Alice", "Bob"]), team("IT", &["Carol"])];
        let hits = filter_teams(&teams, "bob");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mech");
    }

    #[test]
    fn test_sort_teams_members_by_length() {
        let teams = vec![
            team("A", &["x", "y", "z"]),
            team("B", &["x"]),
            team("C", &["x", "y"]),
        ];
        let sorted = sort_teams(teams, TeamSortKey::Members, SortDirection::Asc);
        assert_eq!(
            sorted.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["B", "C", "A"]
        );
    }

    // -- Aggregations -------------------------------------------------------

    #[test]
    fn test_technician_workload_first_seen_order_and_totals() {
        let mut requests = vec![
            request(1, "a", "E1", "Mech"),
            request(2, "b", "E2", "Mech"),
            request(3, "c", "E3", "Mech"),
            request(4, "d", "E4", "Mech"),
        ];
        requests[0].technician = "Bob".to_string();
        requests[1].technician = "Alice".to_string();
        requests[2].technician = "Bob".to_string();
        // requests[3] stays unassigned

        let workload = technician_workload(&requests);
        let entries: Vec<(&str, i64)> = workload
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        assert_eq!(entries, vec![("Bob", 2), ("Alice", 1)]);

        let assigned = requests.iter().filter(|r| !r.technician.is_empty()).count() as i64;
        assert_eq!(workload.values().sum::<i64>(), assigned);
    }

    #[test]
    fn test_breakdowns_include_zero_buckets() {
        let mut requests = vec![request(1, "a", "E1", "Mech")];
        requests[0].priority = 3;

        let priorities = priority_breakdown(&requests);
        assert_eq!(priorities.len(), 3);
        assert_eq!(priorities[0].value, 0);
        assert_eq!(priorities[2].value, 1);

        let statuses = status_breakdown(&requests);
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0], StatEntry { label: "New".to_string(), value: 1 });
        assert_eq!(statuses[1].value, 0);
    }

    #[test]
    fn test_trend_series_merges_and_sorts_by_calendar_date() {
        let mut requests = vec![
            request(1, "a", "E1", "Mech"),
            request(2, "b", "E2", "Mech"),
            request(3, "c", "E3", "Mech"),
        ];
        requests[0].request_date = date(2024, 3, 10);
        requests[1].request_date = date(2024, 2, 28);
        requests[2].request_date = date(2024, 3, 10);

        let series = trend_series(&requests);
        assert_eq!(
            series,
            vec![
                TrendPoint { date: date(2024, 2, 28), requests: 1 },
                TrendPoint { date: date(2024, 3, 10), requests: 2 },
            ]
        );
    }

    #[test]
    fn test_equipment_open_requests_skips_closed() {
        let mut requests = vec![
            request(1, "a", "Press 01", "Mech"),
            request(2, "b", "Press 01", "Mech"),
            request(3, "c", "Conveyor", "Mech"),
        ];
        requests[1].stage = Stage::Repaired;

        let counts = equipment_open_requests(&requests);
        assert_eq!(counts.get("Press 01"), Some(&1));
        assert_eq!(counts.get("Conveyor"), Some(&1));
    }

    // -- KPIs ---------------------------------------------------------------

    #[test]
    fn test_metrics_scenario() {
        // three requests: stages [New, InProgress, Repaired], priorities
        // [3, 3, 1], the New one scheduled in the past
        let mut requests = vec![
            request(1, "a", "E1", "Mech"),
            request(2, "b", "E2", "Mech"),
            request(3, "c", "E3", "Mech"),
        ];
        requests[0].priority = 3;
        requests[0].scheduled_date = Some(today() - chrono::Duration::days(2));
        requests[1].priority = 3;
        requests[1].stage = Stage::InProgress;
        requests[2].priority = 1;
        requests[2].stage = Stage::Repaired;
        requests[2].request_date = date(2024, 3, 1);
        requests[2].completed_date = Some(date(2024, 3, 4));

        let metrics = reporting_metrics(&requests, today());
        assert_eq!(metrics.total_requests, 3);
        assert_eq!(metrics.critical_pending, 2);
        // only the overdue New request has a scheduled date
        assert_eq!(metrics.compliance_rate, 0.0);
        assert_eq!(metrics.avg_resolution_days, 3.0);

        let columns = group_by_stage(&requests);
        assert_eq!(columns[0].requests.len(), 1);
        assert!(is_overdue(&columns[0].requests[0], today()));
    }

    #[test]
    fn test_metrics_empty_sets_degrade_cleanly() {
        let metrics = reporting_metrics(&[], today());
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.avg_resolution_days, 0.0);
        assert_eq!(metrics.compliance_rate, 100.0);
        assert_eq!(metrics.critical_pending, 0);

        // a repaired request without a completion date cannot contribute
        let mut requests = vec![request(1, "a", "E1", "Mech")];
        requests[0].stage = Stage::Repaired;
        let metrics = reporting_metrics(&requests, today());
        assert_eq!(metrics.avg_resolution_days, 0.0);
    }

    #[test]
    fn test_compliance_counts_only_scheduled() {
        let mut requests = vec![
            request(1, "a", "E1", "Mech"),
            request(2, "b", "E2", "Mech"),
            request(3, "c", "E3", "Mech"),
        ];
        requests[0].scheduled_date = Some(today() + chrono::Duration::days(3));
        requests[1].scheduled_date = Some(today() - chrono::Duration::days(3));
        // requests[2] has no schedule and is excluded entirely

        let metrics = reporting_metrics(&requests, today());
        assert_eq!(metrics.compliance_rate, 50.0);
    }

    #[test]
    fn test_tracker_rows_shape() {
        let mut requests = vec![
            request(1, "a", "Press 01", "Mech"),
            request(2, "b", "Press 02", "Mech"),
        ];
        requests[0].scheduled_date = Some(today() - chrono::Duration::days(1));
        requests[1].stage = Stage::Repaired;

        let rows = tracker_rows(&requests, today(), 10);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_overdue);
        assert_eq!(rows[0].progress, 10);
        assert_eq!(rows[1].progress, 100);

        assert_eq!(tracker_rows(&requests, today(), 1).len(), 1);
    }
}
