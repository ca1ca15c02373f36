//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! Every test builds the real application router (middleware included) on top
//! of its own `sqlite::memory:` store and drives it in-process with
//! `tower::ServiceExt::oneshot`. No server or external database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use stockroom_web::config::WebConfig;
use stockroom_web::db;
use stockroom_web::state::AppState;

/// A fully wired application backed by a private in-memory store.
pub struct TestApp {
    /// Direct handle on the store, for assertions and fault injection.
    pub pool: SqlitePool,
    router: Router,
}

/// The parts of a response the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestApp {
    /// Build the application with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory store cannot be created.
    pub async fn new() -> Self {
        let pool = db::connect_in_memory()
            .await
            .expect("Failed to open in-memory store");
        let config = WebConfig::from_lookup(|_| None).expect("Default config must load");
        let router = stockroom_web::app(AppState::new(config, pool.clone()));

        Self { pool, router }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send a url-encoded form POST.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send a JSON POST.
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Number of rows in `table`.
    pub async fn count_rows(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows");
        count
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl TestResponse {
    /// Assert this is a bare `302 Found` to `location`.
    ///
    /// # Panics
    ///
    /// Panics if the status, `Location` header or body differ.
    pub fn assert_found(&self, location: &str) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(location));
        assert!(self.body.is_empty());
    }
}
