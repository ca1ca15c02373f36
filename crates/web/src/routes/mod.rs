//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store reachable)
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/add           - Empty add-product form
//! POST /products/add           - Create product, 302 to /products
//! POST /products/delete/{id}   - Delete product, 302 to /products
//!
//! # Buyers
//! GET  /buyers                 - Buyer listing
//! GET  /buyers/add             - Empty add-buyer form
//! POST /buyers/add             - Create buyer, 302 to /buyers
//! POST /buyers/delete/{id}     - Delete buyer, 302 to /buyers
//! ```

pub mod buyers;
pub mod health;
pub mod home;
pub mod products;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/add", get(products::add_page).post(products::add))
        .route("/delete/{id}", post(products::delete))
}

/// Create the buyer routes router.
pub fn buyer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(buyers::index))
        .route("/add", get(buyers::add_page).post(buyers::add))
        .route("/delete/{id}", post(buyers::delete))
}

/// Create the health check router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/health", health_routes())
        .nest("/products", product_routes())
        .nest("/buyers", buyer_routes())
}

/// `302 Found` to a listing page, with an empty body.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
