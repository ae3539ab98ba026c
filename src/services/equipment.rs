//! Equipment service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
    store::Store,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    store: Arc<Store>,
}

impl EquipmentService {
    pub fn new(repository: Repository, store: Arc<Store>) -> Self {
        Self { repository, store }
    }

    pub fn list(&self) -> Vec<Equipment> {
        self.store.equipment_snapshot()
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.store
            .equipment_snapshot()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let created = self.repository.equipment.create(data).await?;
        self.store.upsert_equipment(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        let mut record = self.get_by_id(id)?;
        if let Some(ref name) = data.name {
            record.name = name.clone();
        }
        if let Some(ref serial_number) = data.serial_number {
            record.serial_number = serial_number.clone();
        }
        if let Some(ref category) = data.category {
            record.category = category.clone();
        }
        if let Some(ref department) = data.department {
            record.department = department.clone();
        }
        if let Some(ref company) = data.company {
            record.company = company.clone();
        }
        if data.employee.is_some() {
            record.employee = data.employee.clone();
        }
        if let Some(ref technician) = data.technician {
            record.technician = technician.clone();
        }
        if let Some(ref team) = data.team {
            record.team = team.clone();
        }
        if data.notes.is_some() {
            record.notes = data.notes.clone();
        }

        let updated = self.repository.equipment.update(id, &record).await?;
        self.store.upsert_equipment(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id)?;
        self.repository.equipment.delete(id).await?;
        self.store.remove_equipment(id);
        Ok(())
    }
}
