//! Work center data access

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::work_center::{CreateWorkCenter, WorkCenter},
};

/// Data-access collaborator for work centers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkCentersRepository: Send + Sync {
    /// Full snapshot, ordered by name
    async fn list(&self) -> AppResult<Vec<WorkCenter>>;
    /// Insert a record; the backend assigns the id
    async fn create(&self, data: &CreateWorkCenter) -> AppResult<WorkCenter>;
    /// Replace an existing record
    async fn update(&self, id: i32, record: &WorkCenter) -> AppResult<WorkCenter>;
    /// Delete by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed work center repository
#[derive(Clone)]
pub struct PgWorkCentersRepository {
    pool: Pool<Postgres>,
}

impl PgWorkCentersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkCentersRepository for PgWorkCentersRepository {
    async fn list(&self) -> AppResult<Vec<WorkCenter>> {
        let rows = sqlx::query_as::<_, WorkCenter>("SELECT * FROM work_centers ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &CreateWorkCenter) -> AppResult<WorkCenter> {
        sqlx::query_as::<_, WorkCenter>(
            "INSERT INTO work_centers (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to create work center: {}", e)))
    }

    async fn update(&self, id: i32, record: &WorkCenter) -> AppResult<WorkCenter> {
        sqlx::query_as::<_, WorkCenter>(
            "UPDATE work_centers SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&record.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to update work center: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM work_centers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Work center {} not found", id)));
        }
        Ok(())
    }
}
