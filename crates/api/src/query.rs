//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by any handler that supports paginated listing. Values are clamped
/// in the repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Price range filter (`?min_price=&max_price=`) for item searches.
///
/// `min_price` defaults to 0; an absent `max_price` leaves the range
/// unbounded above.
#[derive(Debug, Deserialize)]
pub struct PriceRangeParams {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
