//! HTTP-level integration tests for the `/items` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_item_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/items",
        serde_json::json!({"name": "Laptop", "description": "15 inch", "price": 1200.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Laptop");
    assert_eq!(json["price"], 1200.0);
    assert!(json["id"].is_number());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_item_defaults_price_to_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/items", serde_json::json!({"name": "Sticker"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["price"], 0.0);
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_duplicate_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/items", serde_json::json!({"name": "Laptop"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/items", serde_json::json!({"name": "Laptop"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generated_ids_are_monotonic(pool: PgPool) {
    let mut last_id = 0;
    for name in ["A", "B", "C"] {
        let app = common::build_test_app(pool.clone());
        let response =
            post_json(app, "/api/v1/items", serde_json::json!({"name": name})).await;
        let json = body_json(response).await;
        let id = json["id"].as_i64().unwrap();
        assert!(id > last_id, "ids must be strictly increasing");
        last_id = id;
    }
}

// ---------------------------------------------------------------------------
// Batch create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_batch_create_inserts_all(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/items/batch",
        serde_json::json!([
            {"name": "Pen", "price": 1.5},
            {"name": "Pencil"},
            {"name": "Eraser", "description": "soft"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/count").await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_batch_create_is_all_or_nothing(pool: PgPool) {
    // Second entry repeats the first name, so the unique constraint fires
    // mid-transaction; nothing may be persisted.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/items/batch",
        serde_json::json!([
            {"name": "Pen"},
            {"name": "Pen"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/count").await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0, "failed batch must insert no rows");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_batch_create_rejects_empty_payload(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/items/batch", serde_json::json!([])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_item_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/items", serde_json::json!({"name": "Get Me"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_item_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination_in_stored_order(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/items", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/items?offset=0&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["name"], "First");
    assert_eq!(page[1]["name"], "Second");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items?offset=2&limit=2").await;
    let page = body_json(response).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Third");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_name_exact_match(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/items", serde_json::json!({"name": "Notebook"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/search/name/Notebook").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Notebook");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_name_no_match_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/search/name/Ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_price_range(pool: PgPool) {
    for (name, price) in [("Cheap", 5.0), ("Mid", 50.0), ("Dear", 500.0)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/items",
            serde_json::json!({"name": name, "price": price}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/items/search/price?min_price=10&max_price=100").await;
    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Mid"]);

    // Absent max leaves the range unbounded above.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/items/search/price?min_price=10").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_absent_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/items",
            serde_json::json!({"name": "Chair", "description": "wooden", "price": 40.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/items/{id}"),
        serde_json::json!({"price": 35.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["price"], 35.0);
    assert_eq!(json["name"], "Chair", "absent field must keep stored value");
    assert_eq!(json["description"], "wooden");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_update_overwrites_every_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/items",
            serde_json::json!({"name": "Chair", "description": "wooden", "price": 40.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Omitted description and price fall back to their defaults.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/items/{id}/full"),
        serde_json::json!({"name": "Stool"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Stool");
    assert!(json["description"].is_null());
    assert_eq!(json["price"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_item_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/items/999999",
        serde_json::json!({"price": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_item_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/items", serde_json::json!({"name": "Doomed"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_with_receipt_echoes_removed_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/items", serde_json::json!({"name": "Echoed"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/items/{id}/receipt")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Echoed");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_item_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/items/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
