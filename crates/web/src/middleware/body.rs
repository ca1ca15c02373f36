//! Submission body extractor.
//!
//! The add endpoints take either `application/x-www-form-urlencoded` (what
//! the HTML forms send) or `application/json` into the same form type.

use axum::{
    Form, Json,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Extractor that decodes a JSON body when the content type says so and a
/// url-encoded form body otherwise.
///
/// # Example
///
/// ```rust,ignore
/// async fn add(FormOrJson(form): FormOrJson<ProductForm>) -> Response {
///     // ...
/// }
/// ```
pub struct FormOrJson<T>(pub T);

/// Error returned when the body cannot be decoded.
#[derive(Debug)]
pub enum BodyRejection {
    Form(FormRejection),
    Json(JsonRejection),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Form(rejection) => rejection.into_response(),
            Self::Json(rejection) => rejection.into_response(),
        }
    }
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Json)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Form)?;
            Ok(Self(value))
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| {
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}
