//! Buyer route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use stockroom_core::{Buyer, BuyerForm, BuyerId};

use super::found;
use crate::db::{BuyerRepository, RepositoryError};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::FormOrJson;
use crate::state::AppState;

const LISTING: &str = "/buyers";

/// Shown on the form when the store rejects a duplicate email.
pub const DUPLICATE_EMAIL: &str = "Email already exists";

/// Buyer row for the listing template.
#[derive(Debug, Clone)]
pub struct BuyerView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<Buyer> for BuyerView {
    fn from(buyer: Buyer) -> Self {
        Self {
            id: buyer.id.as_i64(),
            name: buyer.name,
            email: buyer.email.into_inner(),
            phone: buyer.phone,
            address: buyer.address.unwrap_or_default(),
        }
    }
}

/// Buyer listing page.
#[derive(Template, WebTemplate)]
#[template(path = "buyers/index.html")]
pub struct BuyersTemplate {
    pub buyers: Vec<BuyerView>,
}

/// Add-buyer form page.
#[derive(Template, WebTemplate)]
#[template(path = "buyers/add.html")]
pub struct AddBuyerTemplate {
    pub error: Option<String>,
}

impl AddBuyerTemplate {
    fn with_error(error: String) -> Response {
        Self { error: Some(error) }.into_response()
    }
}

/// List all buyers.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<BuyersTemplate> {
    let buyers = BuyerRepository::new(state.pool()).list_all().await?;

    Ok(BuyersTemplate {
        buyers: buyers.into_iter().map(BuyerView::from).collect(),
    })
}

/// Display the empty add-buyer form.
pub async fn add_page() -> AddBuyerTemplate {
    AddBuyerTemplate { error: None }
}

/// Handle add-buyer form submission.
///
/// A duplicate email gets its own message; any other store failure embeds
/// the underlying error text.
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<BuyerForm>,
) -> Response {
    let new_buyer = match form.validate() {
        Ok(buyer) => buyer,
        Err(e) => {
            tracing::debug!(error = %e, "Buyer submission rejected");
            return AddBuyerTemplate::with_error(e.to_string());
        }
    };

    match BuyerRepository::new(state.pool()).insert(&new_buyer).await {
        Ok(buyer) => {
            let id = buyer.id.to_string();
            tracing::info!(buyer_id = %id, "Buyer added");
            add_breadcrumb("buyers", "Added buyer", Some(&[("buyer_id", id.as_str())]));
            found(LISTING)
        }
        Err(RepositoryError::Conflict(_)) => {
            tracing::info!(email = %new_buyer.email, "Duplicate buyer email");
            AddBuyerTemplate::with_error(DUPLICATE_EMAIL.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert buyer");
            AddBuyerTemplate::with_error(format!("Error adding buyer: {e}"))
        }
    }
}

/// Delete a buyer and return to the listing.
///
/// A non-numeric ID matches no row and still redirects.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response> {
    let Ok(id) = raw_id.parse::<i64>().map(BuyerId::new) else {
        tracing::debug!(id = %raw_id, "Delete id is not numeric, nothing to remove");
        return Ok(found(LISTING));
    };

    let removed = BuyerRepository::new(state.pool())
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::delete("buyer", e))?;

    if removed {
        tracing::info!(buyer_id = %id, "Buyer deleted");
    }

    Ok(found(LISTING))
}
