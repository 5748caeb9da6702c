//! CORS middlewares.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer for the JSON API.
///
/// Any origin may `GET` and `POST` with a JSON body. No credentials are
/// involved anywhere, so there is nothing to protect.
pub fn permissive() -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([Method::GET, Method::POST])
		.allow_headers([header::CONTENT_TYPE])
}
