//! Handlers for the `/colleges` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::college::{College, CreateCollege, UpdateCollege};
use campus_db::models::student::Student;
use campus_db::repositories::{CollegeRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/colleges
///
/// A duplicate `college_name` trips `uq_colleges_college_name` and maps
/// to a 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollege>,
) -> AppResult<(StatusCode, Json<College>)> {
    let college = CollegeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(college)))
}

/// GET /api/v1/colleges
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<College>>> {
    let colleges = CollegeRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(colleges))
}

/// GET /api/v1/colleges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<College>> {
    let college = CollegeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))?;
    Ok(Json(college))
}

/// PUT /api/v1/colleges/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollege>,
) -> AppResult<Json<College>> {
    let college = CollegeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))?;
    Ok(Json(college))
}

/// DELETE /api/v1/colleges/{id}
///
/// Students assigned to the college are kept and unassigned
/// (`ON DELETE SET NULL`).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CollegeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))
    }
}

/// GET /api/v1/colleges/{id}/students
///
/// 404s when the college itself is missing; a college with no students
/// yields an empty list.
pub async fn list_students(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Student>>> {
    CollegeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "College",
            id,
        }))?;

    let students = StudentRepo::list_by_college(&state.pool, id).await?;
    Ok(Json(students))
}
