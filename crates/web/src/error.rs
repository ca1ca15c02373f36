//! Unified error handling with Sentry integration.
//!
//! Read and delete handlers return `Result<T, AppError>`. Store failures there
//! are terminal: the error is logged, captured to Sentry, and answered with a
//! plain-text 500. Submission handlers never produce an `AppError`; they
//! re-render their form instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading a listing failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Deleting a row failed.
    #[error("Error deleting {resource}: {source}")]
    Delete {
        /// Resource name shown to the client, e.g. "product".
        resource: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    /// Wrap a delete failure for the given resource.
    #[must_use]
    pub const fn delete(resource: &'static str, source: RepositoryError) -> Self {
        Self::Delete { resource, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose store details to clients
        let message = match &self {
            Self::Database(_) => "Database error".to_string(),
            Self::Delete { resource, .. } => format!("Error deleting {resource}"),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for operator actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("products", "Added product", Some(&[("product_id", "12")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
