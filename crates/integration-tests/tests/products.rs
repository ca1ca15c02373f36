//! End-to-end tests for the product pages.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use stockroom_core::ValidationError;
use stockroom_integration_tests::TestApp;

const WIDGET: [(&str, &str); 4] = [
    ("name", "Widget"),
    ("category", "Tools"),
    ("price", "9.99"),
    ("quantity", "5"),
];

#[tokio::test]
async fn test_add_product_redirects_and_lists() {
    let app = TestApp::new().await;

    app.post_form("/products/add", &WIDGET)
        .await
        .assert_found("/products");

    let listing = app.get("/products").await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(listing.body.contains("<td>Widget</td>"));
    assert!(listing.body.contains("<td>Tools</td>"));
    assert!(listing.body.contains("<td>9.99</td>"));
    assert!(listing.body.contains("<td>5</td>"));

    let (name, category, price, quantity): (String, String, f64, i64) =
        sqlx::query_as("SELECT name, category, price, quantity FROM products")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(name, "Widget");
    assert_eq!(category, "Tools");
    assert!((price - 9.99).abs() < f64::EPSILON);
    assert_eq!(quantity, 5);
}

#[tokio::test]
async fn test_add_product_with_description() {
    let app = TestApp::new().await;

    let mut fields = WIDGET.to_vec();
    fields.push(("description", "Fits in a pocket"));
    app.post_form("/products/add", &fields)
        .await
        .assert_found("/products");

    let listing = app.get("/products").await;
    assert!(listing.body.contains("Fits in a pocket"));
}

#[tokio::test]
async fn test_listing_shows_exact_price() {
    let app = TestApp::new().await;

    for (name, price) in [("Bolt", "1.234"), ("Washer", "0.001"), ("Crate", "10")] {
        app.post_form(
            "/products/add",
            &[("name", name), ("category", "Tools"), ("price", price), ("quantity", "1")],
        )
        .await
        .assert_found("/products");
    }

    let listing = app.get("/products").await;
    assert!(listing.body.contains("<td>1.234</td>"));
    assert!(listing.body.contains("<td>0.001</td>"));
    assert!(listing.body.contains("<td>10</td>"));
    assert!(!listing.body.contains("<td>0.00</td>"));
}

#[tokio::test]
async fn test_quantity_keeps_leading_digits() {
    let app = TestApp::new().await;

    app.post_form(
        "/products/add",
        &[("name", "Nut"), ("category", "Tools"), ("price", "1"), ("quantity", "1e3")],
    )
    .await
    .assert_found("/products");

    let (quantity,): (i64,) = sqlx::query_as("SELECT quantity FROM products")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(quantity, 1);
}

#[tokio::test]
async fn test_add_product_from_json() {
    let app = TestApp::new().await;

    app.post_json(
        "/products/add",
        &json!({"name": "Widget", "category": "Tools", "price": 9.99, "quantity": 5}),
    )
    .await
    .assert_found("/products");

    let listing = app.get("/products").await;
    assert!(listing.body.contains("<td>Widget</td>"));
    assert!(listing.body.contains("<td>9.99</td>"));
    assert!(listing.body.contains("<td>5</td>"));
}

#[tokio::test]
async fn test_invalid_json_product_rerenders_form() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/products/add",
            &json!({"name": "Widget", "category": "Tools", "price": -1, "quantity": 5}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Price must be a positive number"));
    assert_eq!(app.count_rows("products").await, 0);
}

#[tokio::test]
async fn test_negative_price_rerenders_form() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/products/add",
            &[
                ("name", "Widget"),
                ("category", "Tools"),
                ("price", "-1"),
                ("quantity", "5"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Price must be a positive number"));
    assert!(response.body.contains(r#"action="/products/add""#));
    assert_eq!(app.count_rows("products").await, 0);
    assert!(!app.get("/products").await.body.contains("Widget"));
}

#[tokio::test]
async fn test_rejected_form_does_not_keep_values() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/products/add",
            &[
                ("name", "Sprocket"),
                ("category", "Tools"),
                ("price", "free"),
                ("quantity", "5"),
            ],
        )
        .await;

    assert!(response.body.contains("Price must be a positive number"));
    assert!(!response.body.contains("Sprocket"));
}

#[tokio::test]
async fn test_validation_messages_per_field() {
    let app = TestApp::new().await;

    let cases: [(&[(&str, &str)], ValidationError); 3] = [
        (
            &[("name", "Widget"), ("category", ""), ("price", "1"), ("quantity", "1")],
            ValidationError::MissingRequiredFields,
        ),
        (
            &[("name", "Widget"), ("category", "Tools"), ("price", "1")],
            ValidationError::MissingRequiredFields,
        ),
        (
            &[("name", "Widget"), ("category", "Tools"), ("price", "1"), ("quantity", "-2")],
            ValidationError::InvalidQuantity,
        ),
    ];

    for (fields, expected) in cases {
        let response = app.post_form("/products/add", fields).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(
            response.body.contains(&expected.to_string()),
            "expected {expected:?} for {fields:?}"
        );
    }

    assert_eq!(app.count_rows("products").await, 0);
}

#[tokio::test]
async fn test_zero_quantity_is_accepted() {
    let app = TestApp::new().await;

    app.post_form(
        "/products/add",
        &[("name", "Out of stock"), ("category", "Misc"), ("price", "1.50"), ("quantity", "0")],
    )
    .await
    .assert_found("/products");

    assert_eq!(app.count_rows("products").await, 1);
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new().await;
    app.post_form("/products/add", &WIDGET).await;
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM products")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    app.post_form(&format!("/products/delete/{id}"), &[])
        .await
        .assert_found("/products");

    assert_eq!(app.count_rows("products").await, 0);
}

#[tokio::test]
async fn test_delete_missing_product_is_noop() {
    let app = TestApp::new().await;
    app.post_form("/products/add", &WIDGET).await;

    app.post_form("/products/delete/424242", &[])
        .await
        .assert_found("/products");

    assert_eq!(app.count_rows("products").await, 1);
}

#[tokio::test]
async fn test_delete_with_non_numeric_id_redirects() {
    let app = TestApp::new().await;
    app.post_form("/products/add", &WIDGET).await;

    for id in ["abc", "1.5", "99999999999999999999"] {
        app.post_form(&format!("/products/delete/{id}"), &[])
            .await
            .assert_found("/products");
    }

    assert_eq!(app.count_rows("products").await, 1);
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let app = TestApp::new().await;

    app.post_form("/products/add", &WIDGET).await;
    app.post_form("/products/delete/1", &[]).await;
    app.post_form("/products/add", &WIDGET).await;

    let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM products")
        .fetch_all(&app.pool)
        .await
        .unwrap();
    assert_eq!(ids, vec![(2,)]);
}

#[tokio::test]
async fn test_add_form_page() {
    let app = TestApp::new().await;

    let response = app.get("/products/add").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="price""#));
    assert!(!response.body.contains("alert-error"));
}

#[tokio::test]
async fn test_store_failure_on_listing_is_500() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.get("/products").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Database error");
}

#[tokio::test]
async fn test_store_failure_on_delete_is_500() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.post_form("/products/delete/1", &[]).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Error deleting product");
    assert!(response.location.is_none());
}

#[tokio::test]
async fn test_store_failure_on_add_rerenders_form() {
    let app = TestApp::new().await;
    sqlx::query("DROP TABLE products")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.post_form("/products/add", &WIDGET).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Error adding product: "));
    assert!(response.body.contains("no such table"));
}
