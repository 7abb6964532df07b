//! Catalog item entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: Timestamp,
}

/// DTO for inserting a new item.
///
/// `price` falls back to the column default (0) when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// DTO for partially updating an item. Absent fields keep their stored
/// values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Confirmation payload returned when a delete echoes the removed row.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedItem {
    pub id: DbId,
    pub name: String,
}
