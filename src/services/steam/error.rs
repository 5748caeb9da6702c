//! The errors that can occur when interacting with this service.

use std::sync::Arc;

use thiserror::Error;

use crate::http::{ErrorKind, IntoErrorResponse};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with Steam.
#[derive(Debug, Error)]
pub enum Error
{
	/// No Steam API key was configured.
	#[error(
		"Steam API key not configured. Please add STEAM_API_KEY to your .env file. Get your key \
		 from: https://steamcommunity.com/dev/apikey"
	)]
	MissingApiKey,

	/// The configured Steam API key is the example value.
	#[error(
		"Please replace the placeholder STEAM_API_KEY in your .env file with your actual Steam \
		 API key from: https://steamcommunity.com/dev/apikey"
	)]
	PlaceholderApiKey,

	/// Steam answered with something other than JSON, which is what happens
	/// when the API key is rejected.
	#[error("Invalid Steam API key or API error. Please check your STEAM_API_KEY")]
	InvalidApiKey,

	/// We failed to make an HTTP request to Steam's Web API.
	#[error("failed to make http request to steam")]
	Http(#[from] reqwest::Error),

	/// An error that was shared between concurrent callers of the same cached
	/// request.
	#[error(transparent)]
	Shared(Arc<Error>),
}

impl Error
{
	/// Whether this error means no usable API key is configured.
	///
	/// These errors are never swallowed.
	pub fn is_missing_api_key(&self) -> bool
	{
		match self {
			Self::MissingApiKey | Self::PlaceholderApiKey => true,
			Self::InvalidApiKey | Self::Http(_) => false,
			Self::Shared(source) => source.is_missing_api_key(),
		}
	}
}

impl From<Arc<Error>> for Error
{
	/// The cache keeps its own reference to failed fetches until all waiters
	/// are done, so most errors arrive here shared. Variants without a payload
	/// are rebuilt so callers can match on them.
	fn from(error: Arc<Error>) -> Self
	{
		let shared = match Arc::try_unwrap(error) {
			Ok(error) => return error,
			Err(shared) => shared,
		};

		match *shared {
			Self::MissingApiKey => Self::MissingApiKey,
			Self::PlaceholderApiKey => Self::PlaceholderApiKey,
			Self::InvalidApiKey => Self::InvalidApiKey,
			Self::Http(_) | Self::Shared(_) => Self::Shared(Arc::clone(&shared)),
		}
	}
}

impl IntoErrorResponse for Error
{
	fn error_kind(&self) -> ErrorKind
	{
		match self {
			Self::MissingApiKey | Self::PlaceholderApiKey => ErrorKind::MissingCredentials,
			Self::InvalidApiKey => ErrorKind::ExternalService,
			Self::Http(source) => source.error_kind(),
			Self::Shared(source) => source.error_kind(),
		}
	}
}
