//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (one `http_request` span per request)
//! 3. Request ID (reuse or generate `x-request-id`)
//!
//! Handlers decode submissions with the [`FormOrJson`] extractor.

pub mod body;
pub mod request_id;

pub use body::FormOrJson;
pub use request_id::request_id_middleware;
