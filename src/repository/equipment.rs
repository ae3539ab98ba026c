//! Equipment data access

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment},
};

/// Data-access collaborator for equipment records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// Full snapshot, ordered by name
    async fn list(&self) -> AppResult<Vec<Equipment>>;
    /// Insert a record; the backend assigns the id
    async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment>;
    /// Replace an existing record
    async fn update(&self, id: i32, record: &Equipment) -> AppResult<Equipment>;
    /// Delete by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed equipment repository
#[derive(Clone)]
pub struct PgEquipmentRepository {
    pool: Pool<Postgres>,
}

impl PgEquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentRepository for PgEquipmentRepository {
    async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, serial_number, category, department, company, employee, technician, team, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.company)
        .bind(&data.employee)
        .bind(&data.technician)
        .bind(&data.team)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to create equipment: {}", e)))
    }

    async fn update(&self, id: i32, record: &Equipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET name = $2, serial_number = $3, category = $4, department = $5,
                company = $6, employee = $7, technician = $8, team = $9, notes = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.serial_number)
        .bind(&record.category)
        .bind(&record.department)
        .bind(&record.company)
        .bind(&record.employee)
        .bind(&record.technician)
        .bind(&record.team)
        .bind(&record.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to update equipment: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
