//! Pagination clamping shared by every list query.
//!
//! Handlers pass raw `Option` query params straight through; the clamp
//! happens here so no repository can be asked for an unbounded page.

/// Rows returned when the client does not specify a limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on rows per page regardless of what the client asks for.
pub const MAX_LIMIT: i64 = 100;

/// Clamp an optional client-supplied limit into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp an optional client-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
