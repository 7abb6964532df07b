//! College entity model and DTOs.

use campus_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A college row. Owns the one-to-many side of the student relationship.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct College {
    pub id: DbId,
    pub college_name: String,
    pub tell_num: Option<String>,
}

/// DTO for inserting a new college.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollege {
    pub college_name: String,
    pub tell_num: Option<String>,
}

/// DTO for partially updating a college.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCollege {
    pub college_name: Option<String>,
    pub tell_num: Option<String>,
}
