//! End-to-end tests for the buyer pages.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use stockroom_integration_tests::TestApp;

fn ann(email: &str) -> Vec<(&'static str, &str)> {
    vec![
        ("name", "Ann"),
        ("email", email),
        ("phone", "555"),
        ("address", "1 Main St"),
    ]
}

#[tokio::test]
async fn test_add_buyer_redirects_and_lists() {
    let app = TestApp::new().await;

    app.post_form("/buyers/add", &ann("ann@example.com"))
        .await
        .assert_found("/buyers");

    let listing = app.get("/buyers").await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(listing.body.contains("ann@example.com"));
    assert!(listing.body.contains("1 Main St"));
}

#[tokio::test]
async fn test_invalid_email_rerenders_form() {
    let app = TestApp::new().await;

    for email in ["not-an-email", "ann@example", "ann@.com", "ann smith@example.com"] {
        let response = app
            .post_form("/buyers/add", &[("name", "Ann"), ("email", email), ("phone", "555")])
            .await;

        assert_eq!(response.status, StatusCode::OK, "{email}");
        assert!(
            response.body.contains("Please enter a valid email address"),
            "{email}"
        );
    }

    assert_eq!(app.count_rows("buyers").await, 0);
}

#[tokio::test]
async fn test_missing_phone_rerenders_form() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/buyers/add", &[("name", "Ann"), ("email", "ann@example.com")])
        .await;

    assert!(response.body.contains("All required fields must be filled"));
    assert_eq!(app.count_rows("buyers").await, 0);
}

#[tokio::test]
async fn test_duplicate_email_rerenders_form() {
    let app = TestApp::new().await;

    app.post_form("/buyers/add", &ann("ann@example.com"))
        .await
        .assert_found("/buyers");

    let response = app.post_form("/buyers/add", &ann("ann@example.com")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Email already exists"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM buyers WHERE email = ?")
        .bind("ann@example.com")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_address_is_optional() {
    let app = TestApp::new().await;

    app.post_form(
        "/buyers/add",
        &[("name", "Bo"), ("email", "bo@example.org"), ("phone", "555-0101")],
    )
    .await
    .assert_found("/buyers");

    let (address,): (Option<String>,) = sqlx::query_as("SELECT address FROM buyers")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(address, None);
}

#[tokio::test]
async fn test_delete_buyer_and_missing_buyer() {
    let app = TestApp::new().await;
    app.post_form("/buyers/add", &ann("ann@example.com")).await;

    app.post_form("/buyers/delete/999", &[])
        .await
        .assert_found("/buyers");
    assert_eq!(app.count_rows("buyers").await, 1);

    app.post_form("/buyers/delete/1", &[])
        .await
        .assert_found("/buyers");
    assert_eq!(app.count_rows("buyers").await, 0);
}

#[tokio::test]
async fn test_delete_with_non_numeric_id_redirects() {
    let app = TestApp::new().await;
    app.post_form("/buyers/add", &ann("ann@example.com")).await;

    for id in ["ann", "99999999999999999999"] {
        app.post_form(&format!("/buyers/delete/{id}"), &[])
            .await
            .assert_found("/buyers");
    }

    assert_eq!(app.count_rows("buyers").await, 1);
}

#[tokio::test]
async fn test_add_buyer_from_json() {
    let app = TestApp::new().await;

    app.post_json(
        "/buyers/add",
        &json!({"name": "Ann", "email": "ann@example.com", "phone": "555"}),
    )
    .await
    .assert_found("/buyers");

    assert!(app.get("/buyers").await.body.contains("ann@example.com"));
}

#[tokio::test]
async fn test_json_buyer_goes_through_validation() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/buyers/add",
            &json!({"name": "Ann", "email": "not-an-email", "phone": "555"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Please enter a valid email address"));

    app.post_json(
        "/buyers/add",
        &json!({"name": "Ann", "email": "ann@example.com", "phone": "555"}),
    )
    .await;
    let response = app
        .post_json(
            "/buyers/add",
            &json!({"name": "Bo", "email": "ann@example.com", "phone": 5550101}),
        )
        .await;
    assert!(response.body.contains("Email already exists"));
    assert_eq!(app.count_rows("buyers").await, 1);
}

#[tokio::test]
async fn test_store_failures() {
    let app = TestApp::new().await;
    sqlx::query("DROP TABLE buyers")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.post_form("/buyers/add", &ann("ann@example.com")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Error adding buyer: "));

    let response = app.get("/buyers").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Database error");

    let response = app.post_form("/buyers/delete/1", &[]).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Error deleting buyer");
}
