//! Route definitions for the `/items` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/items`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list).post(item::create))
        .route("/batch", post(item::create_batch))
        .route("/count", get(item::count))
        .route("/search/name/{name}", get(item::search_by_name))
        .route("/search/price", get(item::search_by_price))
        .route(
            "/{id}",
            get(item::get_by_id)
                .put(item::update)
                .delete(item::delete),
        )
        .route("/{id}/full", put(item::replace))
        .route("/{id}/receipt", delete(item::delete_with_receipt))
}
