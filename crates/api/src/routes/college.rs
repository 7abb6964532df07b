//! Route definitions for the `/colleges` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::college;
use crate::state::AppState;

/// Routes mounted at `/colleges`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(college::list).post(college::create))
        .route(
            "/{id}",
            get(college::get_by_id)
                .put(college::update)
                .delete(college::delete),
        )
        .route("/{id}/students", get(college::list_students))
}
