//! Student entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row. `college_id` is a nullable foreign key into `colleges`;
/// a NULL value means the student is unassigned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub major: String,
    pub college_id: Option<DbId>,
    pub added_at: Timestamp,
}

/// DTO for inserting a new student.
///
/// `major` falls back to the column default (`Undeclared`) when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub age: i32,
    pub major: Option<String>,
    pub college_id: Option<DbId>,
}

/// DTO for partially updating a student. Absent fields keep their stored
/// values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub college_id: Option<DbId>,
}

/// One flattened row of the student/college join.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentWithCollege {
    pub student_id: DbId,
    pub student_name: String,
    pub student_age: i32,
    pub major: String,
    pub college_id: DbId,
    pub college_name: String,
    pub college_tell: Option<String>,
}
