//! Team data access

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, Team},
};

/// Data-access collaborator for maintenance teams
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamsRepository: Send + Sync {
    /// Full snapshot, ordered by name
    async fn list(&self) -> AppResult<Vec<Team>>;
    /// Insert a record; the backend assigns the id
    async fn create(&self, data: &CreateTeam) -> AppResult<Team>;
    /// Replace an existing record
    async fn update(&self, id: i32, record: &Team) -> AppResult<Team>;
    /// Delete by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed teams repository. Member rosters are TEXT[] columns so
/// ordering survives round-trips.
#[derive(Clone)]
pub struct PgTeamsRepository {
    pool: Pool<Postgres>,
}

impl PgTeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamsRepository for PgTeamsRepository {
    async fn list(&self) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, members, specialization, company, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.members)
        .bind(&data.specialization)
        .bind(&data.company)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to create team: {}", e)))
    }

    async fn update(&self, id: i32, record: &Team) -> AppResult<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2, members = $3, specialization = $4, company = $5, notes = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.members)
        .bind(&record.specialization)
        .bind(&record.company)
        .bind(&record.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to update team: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }
}
