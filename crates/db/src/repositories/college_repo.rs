//! Repository for the `colleges` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::college::{College, CreateCollege, UpdateCollege};
use crate::pagination::{clamp_limit, clamp_offset};

const COLUMNS: &str = "id, college_name, tell_num";

/// Provides CRUD operations for colleges.
pub struct CollegeRepo;

impl CollegeRepo {
    /// Insert a new college, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCollege) -> Result<College, sqlx::Error> {
        let query = format!(
            "INSERT INTO colleges (college_name, tell_num)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, College>(&query)
            .bind(&input.college_name)
            .bind(&input.tell_num)
            .fetch_one(pool)
            .await
    }

    /// Find a college by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<College>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colleges WHERE id = $1");
        sqlx::query_as::<_, College>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List colleges in insertion order, with clamped pagination.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<College>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colleges ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, College>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update a college. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCollege,
    ) -> Result<Option<College>, sqlx::Error> {
        let query = format!(
            "UPDATE colleges SET
                college_name = COALESCE($2, college_name),
                tell_num = COALESCE($3, tell_num)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, College>(&query)
            .bind(id)
            .bind(&input.college_name)
            .bind(&input.tell_num)
            .fetch_optional(pool)
            .await
    }

    /// Delete a college by ID. Returns `true` if a row was removed.
    ///
    /// Students referencing the college are kept; their `college_id` is
    /// set to NULL by the `fk_students_college` constraint.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colleges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
