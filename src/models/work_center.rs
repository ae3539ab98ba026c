//! Work center model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Work center record — the alternative maintenance target to Equipment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkCenter {
    pub id: i32,
    pub name: String,
}

/// Create work center request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkCenter {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Update work center request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkCenter {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
}
