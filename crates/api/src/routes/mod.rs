pub mod college;
pub mod health;
pub mod item;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                        list, create
/// /items/batch                  transactional batch create
/// /items/count                  total row count
/// /items/search/name/{name}     exact-name search
/// /items/search/price           price range filter
/// /items/{id}                   get, partial update, delete
/// /items/{id}/full              full-replacement update
/// /items/{id}/receipt           delete with confirmation payload
///
/// /colleges                     list, create
/// /colleges/{id}                get, partial update, delete
/// /colleges/{id}/students       students assigned to the college
///
/// /students                     list, create
/// /students/with-college        flattened student/college join
/// /students/{id}                get, partial update, delete
/// /students/{id}/college        the student's college
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", item::router())
        .nest("/colleges", college::router())
        .nest("/students", student::router())
}
