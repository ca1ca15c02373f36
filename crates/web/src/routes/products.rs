//! Product route handlers.
//!
//! Listing, add form, and delete for the `products` table. A rejected or
//! failed submission re-renders an empty form with the error; entered values
//! are not carried back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use stockroom_core::{Product, ProductForm, ProductId};

use super::found;
use crate::db::ProductRepository;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::FormOrJson;
use crate::state::AppState;

const LISTING: &str = "/products";

// =============================================================================
// View Types
// =============================================================================

/// Product row for the listing template.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price exactly as stored, e.g. `9.99` or `10`.
    pub price: String,
    pub quantity: i64,
    pub description: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name,
            category: product.category,
            price: product.price.to_string(),
            quantity: product.quantity.as_i64(),
            description: product.description.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub products: Vec<ProductView>,
}

/// Add-product form page.
#[derive(Template, WebTemplate)]
#[template(path = "products/add.html")]
pub struct AddProductTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Route Handlers
// =============================================================================

/// List all products.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<ProductsTemplate> {
    let products = ProductRepository::new(state.pool()).list_all().await?;

    Ok(ProductsTemplate {
        products: products.into_iter().map(ProductView::from).collect(),
    })
}

/// Display the empty add-product form.
pub async fn add_page() -> AddProductTemplate {
    AddProductTemplate { error: None }
}

/// Handle add-product submission, url-encoded or JSON.
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ProductForm>,
) -> Response {
    let new_product = match form.validate() {
        Ok(product) => product,
        Err(e) => {
            tracing::debug!(error = %e, "Product submission rejected");
            return AddProductTemplate {
                error: Some(e.to_string()),
            }
            .into_response();
        }
    };

    match ProductRepository::new(state.pool()).insert(&new_product).await {
        Ok(product) => {
            let id = product.id.to_string();
            tracing::info!(product_id = %id, name = %product.name, "Product added");
            add_breadcrumb("products", "Added product", Some(&[("product_id", id.as_str())]));
            found(LISTING)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert product");
            AddProductTemplate {
                error: Some(format!("Error adding product: {e}")),
            }
            .into_response()
        }
    }
}

/// Delete a product and return to the listing.
///
/// Deleting an ID that does not exist, or is not a number, still redirects.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response> {
    let Ok(id) = raw_id.parse::<i64>().map(ProductId::new) else {
        tracing::debug!(id = %raw_id, "Delete id is not numeric, nothing to remove");
        return Ok(found(LISTING));
    };

    let removed = ProductRepository::new(state.pool())
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::delete("product", e))?;

    if removed {
        tracing::info!(product_id = %id, "Product deleted");
        let id = id.to_string();
        add_breadcrumb("products", "Deleted product", Some(&[("product_id", id.as_str())]));
    } else {
        tracing::debug!(product_id = %id, "Delete matched no product");
    }

    Ok(found(LISTING))
}
