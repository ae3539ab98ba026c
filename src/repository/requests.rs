//! Maintenance request data access

use async_trait::async_trait;
use sqlx::{types::Json, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::request::MaintenanceRequest,
};

/// Data-access collaborator for maintenance requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestsRepository: Send + Sync {
    /// Full snapshot, ordered by id
    async fn list(&self) -> AppResult<Vec<MaintenanceRequest>>;
    /// Insert a record; the backend assigns the id (the record's own id
    /// field is ignored)
    async fn create(&self, record: &MaintenanceRequest) -> AppResult<MaintenanceRequest>;
    /// Replace an existing record
    async fn update(&self, id: i32, record: &MaintenanceRequest) -> AppResult<MaintenanceRequest>;
    /// Delete by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed request repository. The worksheet checklist is stored
/// inline as JSONB: items belong to exactly one request and are never
/// queried on their own.
#[derive(Clone)]
pub struct PgRequestsRepository {
    pool: Pool<Postgres>,
}

impl PgRequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestsRepository for PgRequestsRepository {
    async fn list(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, record: &MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                subject, created_by, maintenance_for, equipment, equipment_id,
                work_center, category, request_date, created_date,
                maintenance_type, team, technician, scheduled_date,
                scheduled_time, duration, priority, company, stage,
                completed_date, notes, instructions, worksheet
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING *
            "#,
        )
        .bind(&record.subject)
        .bind(&record.created_by)
        .bind(record.maintenance_for)
        .bind(&record.equipment)
        .bind(record.equipment_id)
        .bind(&record.work_center)
        .bind(&record.category)
        .bind(record.request_date)
        .bind(record.created_date)
        .bind(record.maintenance_type)
        .bind(&record.team)
        .bind(&record.technician)
        .bind(record.scheduled_date)
        .bind(record.scheduled_time)
        .bind(&record.duration)
        .bind(record.priority)
        .bind(&record.company)
        .bind(record.stage)
        .bind(record.completed_date)
        .bind(&record.notes)
        .bind(&record.instructions)
        .bind(Json(&record.worksheet))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to create request: {}", e)))
    }

    async fn update(&self, id: i32, record: &MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET subject = $2, created_by = $3, maintenance_for = $4,
                equipment = $5, equipment_id = $6, work_center = $7,
                category = $8, request_date = $9, created_date = $10,
                maintenance_type = $11, team = $12, technician = $13,
                scheduled_date = $14, scheduled_time = $15, duration = $16,
                priority = $17, company = $18, stage = $19,
                completed_date = $20, notes = $21, instructions = $22,
                worksheet = $23
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.subject)
        .bind(&record.created_by)
        .bind(record.maintenance_for)
        .bind(&record.equipment)
        .bind(record.equipment_id)
        .bind(&record.work_center)
        .bind(&record.category)
        .bind(record.request_date)
        .bind(record.created_date)
        .bind(record.maintenance_type)
        .bind(&record.team)
        .bind(&record.technician)
        .bind(record.scheduled_date)
        .bind(record.scheduled_time)
        .bind(&record.duration)
        .bind(record.priority)
        .bind(&record.company)
        .bind(record.stage)
        .bind(record.completed_date)
        .bind(&record.notes)
        .bind(&record.instructions)
        .bind(Json(&record.worksheet))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to update request: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance request {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance request {} not found",
                id
            )));
        }
        Ok(())
    }
}
