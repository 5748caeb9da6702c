//! This module contains the [`ErrorKind`] enum.
//!
//! It is an exhaustive list of the error conditions the API might report, and
//! decides which status code each of them gets.

/// The category of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
	/// A required request field was missing or empty.
	MissingInput,

	/// A request field was present but could not be parsed.
	InvalidInput,

	/// The request body was not valid JSON, or had the wrong shape.
	InvalidRequestBody,

	/// The API key for an upstream service is missing or still a placeholder.
	///
	/// This is a server misconfiguration, not the caller's fault.
	MissingCredentials,

	/// An upstream service responded with an error, or not at all.
	ExternalService,

	/// An upstream service responded, but we could not decode the response.
	DecodeExternal,

	/// Something went wrong on our side.
	///
	/// Any occurrence of this is considered a bug!
	Internal,
}

impl ErrorKind
{
	/// Every variant, in declaration order.
	pub const fn all() -> &'static [Self]
	{
		&[
			Self::MissingInput,
			Self::InvalidInput,
			Self::InvalidRequestBody,
			Self::MissingCredentials,
			Self::ExternalService,
			Self::DecodeExternal,
			Self::Internal,
		]
	}

	/// The HTTP status code for this kind of error.
	pub const fn status(self) -> http::StatusCode
	{
		match self {
			Self::MissingInput | Self::InvalidInput | Self::InvalidRequestBody => {
				http::StatusCode::BAD_REQUEST
			}
			Self::MissingCredentials
			| Self::ExternalService
			| Self::DecodeExternal
			| Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
