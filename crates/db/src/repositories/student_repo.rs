//! Repository for the `students` table, including the college join.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, StudentWithCollege, UpdateStudent};
use crate::pagination::{clamp_limit, clamp_offset};

const COLUMNS: &str = "id, name, age, major, college_id, added_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// If `major` is `None`, defaults to `Undeclared`. Existence of
    /// `college_id` is checked by the handler before insert; a stale id
    /// still trips `fk_students_college` at commit.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, age, major, college_id)
             VALUES ($1, $2, COALESCE($3, 'Undeclared'), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.major)
            .bind(input.college_id)
            .fetch_one(pool)
            .await
    }

    /// Find a student by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List students in insertion order, with clamped pagination.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Student>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// List all students assigned to a given college.
    pub async fn list_by_college(
        pool: &PgPool,
        college_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE college_id = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(college_id)
            .fetch_all(pool)
            .await
    }

    /// List students joined with their college in one pass.
    ///
    /// Inner join: students without a college are omitted.
    pub async fn list_with_college(pool: &PgPool) -> Result<Vec<StudentWithCollege>, sqlx::Error> {
        sqlx::query_as::<_, StudentWithCollege>(
            "SELECT s.id AS student_id,
                    s.name AS student_name,
                    s.age AS student_age,
                    s.major,
                    c.id AS college_id,
                    c.college_name,
                    c.tell_num AS college_tell
             FROM students s
             JOIN colleges c ON s.college_id = c.id
             ORDER BY s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                major = COALESCE($4, major),
                college_id = COALESCE($5, college_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.major)
            .bind(input.college_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
