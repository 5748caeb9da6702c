//! A very basic service that acts as a healthcheck.

use std::fmt;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub(crate) mod http;

/// A service that simply responds if the API is healthy.
#[derive(Clone, Copy)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct HealthService {}

impl fmt::Debug for HealthService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("HealthService").finish_non_exhaustive()
	}
}

impl HealthService
{
	/// Create a new [`HealthService`].
	#[tracing::instrument]
	pub fn new() -> Self
	{
		Self {}
	}

	/// Says hello to the world.
	#[tracing::instrument(level = "debug")]
	pub async fn hello(&self) -> HelloResponse
	{
		HelloResponse { message: "Hello from banwatch" }
	}
}

/// Response payload for the greeting endpoint.
#[derive(Debug, Serialize, utoipa::ToSchema, utoipa::IntoResponses)]
#[response(status = OK)]
pub struct HelloResponse
{
	/// A friendly greeting.
	#[schema(example = "Hello from banwatch")]
	pub message: &'static str,
}

impl IntoResponse for HelloResponse
{
	fn into_response(self) -> Response
	{
		crate::http::extract::Json(self).into_response()
	}
}
