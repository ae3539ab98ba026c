//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment record
///
/// Maintenance requests reference equipment by `name` and copy
/// `category`/`team` onto themselves at selection time; later edits here do
/// not rewrite existing requests.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: String,
    pub company: String,
    /// Owner / assigned employee
    pub employee: Option<String>,
    /// Default technician for requests on this equipment
    pub technician: String,
    /// Default maintenance team name
    pub team: String,
    pub notes: Option<String>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub category: String,
    pub department: String,
    pub company: String,
    pub employee: Option<String>,
    pub technician: String,
    pub team: String,
    pub notes: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub employee: Option<String>,
    pub technician: Option<String>,
    pub team: Option<String>,
    pub notes: Option<String>,
}
