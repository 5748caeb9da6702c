//! Error responses.
//!
//! Every failed request produces a JSON body of the shape
//! `{ "error": "<message>" }`. The [`ErrorResponse`] type implements
//! [`IntoResponse`] and can be created from any error type that implements
//! [`IntoErrorResponse`].

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod error_kind;
pub use error_kind::ErrorKind;

mod into_error_response;
pub use into_error_response::IntoErrorResponse;

/// An HTTP error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse
{
	/// The HTTP status code the response should have.
	#[serde(skip)]
	status: http::StatusCode,

	/// Human-readable error message.
	#[schema(example = "Profile URL is required")]
	error: String,
}

impl ErrorResponse
{
	/// Creates an error response with an explicit status and message.
	pub fn new<M>(kind: ErrorKind, message: M) -> Self
	where
		M: Into<String>,
	{
		Self { status: kind.status(), error: message.into() }
	}

	/// The status code of this response.
	pub const fn status(&self) -> http::StatusCode
	{
		self.status
	}

	/// The error message.
	pub fn message(&self) -> &str
	{
		&self.error
	}
}

impl<E> From<E> for ErrorResponse
where
	E: IntoErrorResponse,
{
	#[track_caller]
	fn from(error: E) -> Self
	{
		tracing::debug!(loc = %Location::caller(), ?error, "creating error response");

		let kind = error.error_kind();

		if kind.status().is_server_error() {
			tracing::warn!(%error, ?kind, "request failed");
		}

		Self { status: kind.status(), error: error.to_string() }
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		let status = self.status;
		let body = crate::http::extract::Json(self);

		(status, body).into_response()
	}
}

/// Trait implementations for [`utoipa`].
mod utoipa_impls
{
	use std::collections::BTreeMap;

	use itertools::Itertools;
	use utoipa::openapi::content::ContentBuilder;
	use utoipa::openapi::response::{Response, ResponseBuilder, ResponsesBuilder};
	use utoipa::openapi::{Ref, RefOr};
	use utoipa::IntoResponses;

	use super::{ErrorKind, ErrorResponse};

	impl IntoResponses for ErrorResponse
	{
		fn responses() -> BTreeMap<String, RefOr<Response>>
		{
			let statuses = ErrorKind::all()
				.iter()
				.map(|kind| kind.status())
				.unique()
				.collect_vec();

			let responses = statuses.iter().map(|status| {
				let content = ContentBuilder::new()
					.schema(Ref::from_schema_name("ErrorResponse"))
					.build();

				let response = ResponseBuilder::new()
					.description(status.canonical_reason().unwrap_or_default())
					.content("application/json", content)
					.build();

				(status.as_str(), response)
			});

			ResponsesBuilder::new()
				.responses_from_iter(responses)
				.build()
				.into()
		}
	}
}
