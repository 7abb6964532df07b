//! Handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::college::College;
use campus_db::models::student::{CreateStudent, Student, StudentWithCollege, UpdateStudent};
use campus_db::repositories::{CollegeRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/students
///
/// When `college_id` is supplied, the referenced college must exist; the
/// check happens before the insert so the client gets a 404 naming the
/// college instead of a bare constraint violation.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    if let Some(college_id) = input.college_id {
        CollegeRepo::find_by_id(&state.pool, college_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "College",
                id: college_id,
            }))?;
    }

    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/with-college
///
/// Flattened join rows; students without a college are omitted.
pub async fn list_with_college(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudentWithCollege>>> {
    let rows = StudentRepo::list_with_college(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
///
/// Partial update. A `college_id` pointing at a missing college surfaces
/// as a 409 via `fk_students_college`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))
    }
}

/// GET /api/v1/students/{id}/college
///
/// 404s when the student is missing and when the student has no assigned
/// college.
pub async fn get_college(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<College>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    let college_id = student
        .college_id
        .ok_or_else(|| AppError::NotFound(format!("Student {id} has no college")))?;

    let college = CollegeRepo::find_by_id(&state.pool, college_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "College",
            id: college_id,
        }))?;
    Ok(Json(college))
}
