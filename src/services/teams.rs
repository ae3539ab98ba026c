//! Team service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, Team, UpdateTeam},
    repository::Repository,
    store::Store,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
    store: Arc<Store>,
}

impl TeamsService {
    pub fn new(repository: Repository, store: Arc<Store>) -> Self {
        Self { repository, store }
    }

    pub fn list(&self) -> Vec<Team> {
        self.store.teams_snapshot()
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<Team> {
        self.store
            .teams_snapshot()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        let created = self.repository.teams.create(data).await?;
        self.store.upsert_team(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i32, data: &UpdateTeam) -> AppResult<Team> {
        let mut record = self.get_by_id(id)?;
        if let Some(ref name) = data.name {
            record.name = name.clone();
        }
        if let Some(ref members) = data.members {
            record.members = members.clone();
        }
        if let Some(ref specialization) = data.specialization {
            record.specialization = specialization.clone();
        }
        if let Some(ref company) = data.company {
            record.company = company.clone();
        }
        if data.notes.is_some() {
            record.notes = data.notes.clone();
        }

        let updated = self.repository.teams.update(id, &record).await?;
        self.store.upsert_team(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id)?;
        self.repository.teams.delete(id).await?;
        self.store.remove_team(id);
        Ok(())
    }

    /// Add a member to the roster; rejects duplicates within the team.
    pub async fn add_member(&self, id: i32, name: &str) -> AppResult<Team> {
        let mut record = self.get_by_id(id)?;
        if !record.add_member(name) {
            return Err(AppError::Validation(format!(
                "\"{}\" is empty or already on team {}",
                name.trim(),
                record.name
            )));
        }
        let updated = self.repository.teams.update(id, &record).await?;
        self.store.upsert_team(updated.clone());
        Ok(updated)
    }

    /// Remove a member from the roster; unknown names are a no-op.
    pub async fn remove_member(&self, id: i32, name: &str) -> AppResult<Team> {
        let mut record = self.get_by_id(id)?;
        record.remove_member(name);
        let updated = self.repository.teams.update(id, &record).await?;
        self.store.upsert_team(updated.clone());
        Ok(updated)
    }
}
