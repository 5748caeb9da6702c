//! This module contains the [`IntoErrorResponse`] trait.
//!
//! It defines the contract for how an error type can be turned into an HTTP
//! error response.

use std::convert;

use super::ErrorKind;

/// A trait for creating [`ErrorResponse`]s from error types.
///
/// The [`Display`] implementation of the error becomes the response message,
/// so it should be fit for end users.
///
/// [`ErrorResponse`]: super::ErrorResponse
/// [`Display`]: std::fmt::Display
pub trait IntoErrorResponse: std::error::Error
{
	/// Returns the kind of this error.
	fn error_kind(&self) -> ErrorKind;
}

impl IntoErrorResponse for convert::Infallible
{
	fn error_kind(&self) -> ErrorKind
	{
		match *self {}
	}
}

impl IntoErrorResponse for reqwest::Error
{
	fn error_kind(&self) -> ErrorKind
	{
		if self.is_connect() || self.is_timeout() || self.is_redirect() {
			return ErrorKind::ExternalService;
		}

		if self.is_body() || self.is_decode() {
			return ErrorKind::DecodeExternal;
		}

		match self.status() {
			Some(status) if status.is_client_error() || status.is_server_error() => {
				ErrorKind::ExternalService
			}
			Some(_) | None => ErrorKind::Internal,
		}
	}
}
