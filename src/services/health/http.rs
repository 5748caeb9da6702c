//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::{HealthService, HelloResponse};

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		Router::new()
			.route("/", routing::get(get))
			.route("/api/v2/hello", routing::get(hello))
			.with_state(svc)
	}
}

/// (͡ ͡° ͜ つ ͡͡°)
#[tracing::instrument]
#[utoipa::path(get, path = "/", tag = "Health", responses(
  (status = OK, description = "The API is healthy.", body = str),
))]
async fn get(State(_svc): State<HealthService>) -> &'static str
{
	"(͡ ͡° ͜ つ ͡͡°)"
}

/// Say hello.
#[tracing::instrument]
#[utoipa::path(get, path = "/api/v2/hello", tag = "Health", responses(HelloResponse))]
async fn hello(State(svc): State<HealthService>) -> HelloResponse
{
	svc.hello().await
}
