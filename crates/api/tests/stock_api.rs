//! HTTP-level integration tests for the validated (stock) item schema.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, get_json, post_json, put_json, send_raw, stock_app};
use serde_json::{json, Value};

fn widget(price: f64) -> Value {
    json!({
        "name": "widget",
        "in_stock": true,
        "price": price,
        "supplier": {"id": 7, "is_active": false},
    })
}

// ---------------------------------------------------------------------------
// Test: create fills defaults and returns the whole registry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_stock_item_with_defaults() {
    let app = stock_app();
    let response = post_json(&app, "/items", &json!({"price": 2.5, "supplier": {"id": 1}})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{
            "name": null,
            "in_stock": false,
            "price": 2.5,
            "supplier": {"id": 1, "is_active": true},
        }])
    );

    let response = post_json(&app, "/items", &widget(9.99)).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1], widget(9.99));
}

// ---------------------------------------------------------------------------
// Test: price must be strictly positive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_non_positive_price_returns_422_and_does_not_mutate() {
    let app = stock_app();

    for price in [0.0, -1.0] {
        let response = post_json(&app, "/items", &widget(price)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["detail"][0]["loc"], json!(["body", "price"]));
        assert_eq!(json["detail"][0]["type"], "greater_than");
        assert_eq!(json["detail"][0]["msg"], "Input should be greater than 0");
    }

    assert_eq!(body_json(get(&app, "/items").await).await, json!([]));
}

// ---------------------------------------------------------------------------
// Test: name length limit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_name_longer_than_50_returns_422() {
    let app = stock_app();
    let mut item = widget(1.0);
    item["name"] = json!("n".repeat(51));

    let response = post_json(&app, "/items", &item).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "name"]));
    assert_eq!(json["detail"][0]["type"], "string_too_long");

    item["name"] = json!("n".repeat(50));
    let response = post_json(&app, "/items", &item).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: required fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_required_fields_return_422() {
    let app = stock_app();

    let response = post_json(&app, "/items", &json!({"supplier": {"id": 1}})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "price"]));
    assert_eq!(json["detail"][0]["type"], "missing");

    let response = post_json(&app, "/items", &json!({"price": 1.0})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "supplier"]));

    let response = post_json(&app, "/items", &json!({"price": 1.0, "supplier": {}})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(body_json(get(&app, "/items").await).await, json!([]));
}

// ---------------------------------------------------------------------------
// Test: get requires a valid item body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_validates_ignored_body() {
    let app = stock_app();
    post_json(&app, "/items", &widget(3.0)).await;

    let response = get_json(&app, "/items/0", &widget(1.0)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, widget(3.0));

    let response = get_json(&app, "/items/0", &widget(0.0)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: update returns the item id, item and updater
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_returns_structured_result() {
    let app = stock_app();
    post_json(&app, "/items", &widget(3.0)).await;

    let response = put_json(&app, "/items/0?updated_by=42", &widget(4.5)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"item_id": 0, "item": widget(4.5), "updated_by": 42})
    );

    let response = get_json(&app, "/items/0", &widget(1.0)).await;
    assert_eq!(body_json(response).await["price"], 4.5);
}

#[tokio::test]
async fn test_update_without_updated_by_returns_422() {
    let app = stock_app();
    post_json(&app, "/items", &widget(3.0)).await;

    let response = put_json(&app, "/items/0", &widget(4.5)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["query", "updated_by"]));
}

#[tokio::test]
async fn test_update_out_of_range_returns_404() {
    let app = stock_app();
    let response = put_json(&app, "/items/3?updated_by=1", &widget(4.5)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Item 3 not found"}));
}

#[tokio::test]
async fn test_invalid_update_leaves_item_untouched() {
    let app = stock_app();
    post_json(&app, "/items", &widget(3.0)).await;

    let response = put_json(&app, "/items/0?updated_by=1", &widget(-5.0)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(get(&app, "/items").await).await;
    assert_eq!(json, json!([widget(3.0)]));
}

// ---------------------------------------------------------------------------
// Test: non-object bodies and nested field locations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_array_body_returns_422_and_does_not_mutate() {
    let app = stock_app();
    let response = send_raw(&app, Method::POST, "/items", "[null, false, 2.5, [7]]").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body"]));
    assert_eq!(json["detail"][0]["type"], "type_error");

    assert_eq!(body_json(get(&app, "/items").await).await, json!([]));
}

#[tokio::test]
async fn test_nested_supplier_errors_are_located() {
    let app = stock_app();

    let response = post_json(&app, "/items", &json!({"price": 1.0, "supplier": {"id": "x"}})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "supplier", "id"]));
    assert_eq!(json["detail"][0]["type"], "type_error");

    let response = post_json(&app, "/items", &json!({"price": 1.0, "supplier": {}})).await;
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "supplier", "id"]));
    assert_eq!(json["detail"][0]["type"], "missing");
}
