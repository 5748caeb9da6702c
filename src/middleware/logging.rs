//! Request logging.
//!
//! Every request gets its own `request` span carrying a UUIDv7, the route it
//! matched, and the client address. Upstream calls made by the services are
//! logged inside that span, so one lookup can be followed from the incoming
//! request to every Steam and Leetify call it caused.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, MatchedPath, Request};
use axum::response::Response;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, TraceLayer};
use uuid::Uuid;

/// Log target for everything emitted by this middleware.
const TARGET: &str = "banwatch_api::http";

/// The fully configured [`TraceLayer`].
pub type Layer = TraceLayer<
	SharedClassifier<ServerErrorsAsFailures>,
	fn(&Request) -> tracing::Span,
	fn(&Request, &tracing::Span),
	fn(&Response, Duration, &tracing::Span),
	DefaultOnBodyChunk,
	DefaultOnEos,
	fn(ServerErrorsFailureClass, Duration, &tracing::Span),
>;

/// Creates a middleware that will log incoming HTTP requests.
pub fn layer() -> Layer
{
	TraceLayer::new_for_http()
		.make_span_with(make_span as fn(&Request) -> tracing::Span)
		.on_request(on_request as fn(&Request, &tracing::Span))
		.on_response(on_response as fn(&Response, Duration, &tracing::Span))
		.on_failure(on_failure as fn(ServerErrorsFailureClass, Duration, &tracing::Span))
}

/// The address of the client, if the server recorded it.
fn client_ip(request: &Request) -> Option<SocketAddr>
{
	request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|ConnectInfo(addr)| *addr)
}

/// The route pattern the request matched, falling back to the raw path.
///
/// Requests that did not match any route (404s) only have the latter.
fn route(request: &Request) -> &str
{
	request
		.extensions()
		.get::<MatchedPath>()
		.map_or_else(|| request.uri().path(), MatchedPath::as_str)
}

/// Opens the `request` span.
fn make_span(request: &Request) -> tracing::Span
{
	let user_agent = request
		.headers()
		.get(http::header::USER_AGENT)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default();

	tracing::info_span! {
		target: TARGET,
		"request",
		request.id = %Uuid::now_v7(),
		request.ip = client_ip(request).map(tracing::field::display),
		request.method = %request.method(),
		request.route = route(request),
		request.user_agent = user_agent,
		response.status = tracing::field::Empty,
		latency_ms = tracing::field::Empty,
	}
}

#[allow(clippy::missing_docs_in_private_items)]
fn on_request(request: &Request, _span: &tracing::Span)
{
	tracing::debug!(target: TARGET, uri = %request.uri(), "received request");
}

/// Records status and latency on the request span.
fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	span.record("response.status", response.status().as_u16())
		.record("latency_ms", u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));

	tracing::debug!(target: TARGET, "finished processing request");
}

#[allow(clippy::missing_docs_in_private_items)]
fn on_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(target: TARGET, %error, ?latency, "request failed");
		}
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::warn!(target: TARGET, %status, ?latency, "request failed");
		}
	}
}
