//! This module contains the [`Json`] extractor, a wrapper around [`axum::Json`]
//! with a custom error response.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::{ErrorKind, ErrorResponse, IntoErrorResponse};

/// An extractor for JSON request bodies.
///
/// Unlike [`axum::Json`], this does not insist on a `Content-Type` header;
/// browsers posting from simple forms often leave it out. Rejections are
/// rendered as [`ErrorResponse`]s.
#[derive(Debug)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
	S: Send + Sync,
	T: DeserializeOwned,
{
	type Rejection = JsonRejection;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		let bytes = Bytes::from_request(req, state).await?;

		serde_json::from_slice(&bytes).map(Self).map_err(Into::into)
	}
}

impl<T> IntoResponse for Json<T>
where
	axum::Json<T>: IntoResponse,
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

/// Rejection for the [`Json`] extractor.
#[derive(Debug, Error)]
pub enum JsonRejection
{
	/// The request body could not be read.
	#[error("failed to read request body")]
	Body(#[from] BytesRejection),

	/// The request body was not the JSON we expected.
	#[error("invalid request body: {0}")]
	Deserialize(#[from] serde_json::Error),
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		ErrorResponse::from(self).into_response()
	}
}

impl IntoErrorResponse for JsonRejection
{
	fn error_kind(&self) -> ErrorKind
	{
		ErrorKind::InvalidRequestBody
	}
}
