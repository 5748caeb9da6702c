//! The errors that can occur when interacting with this service.

use std::sync::Arc;

use thiserror::Error;

use crate::http::{ErrorKind, IntoErrorResponse};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with Leetify.
#[derive(Debug, Error)]
pub enum Error
{
	/// The request did not include a SteamID.
	#[error("Steam ID is required")]
	MissingSteamID,

	/// The request included something that isn't a Steam64 ID.
	#[error("Invalid Steam64 ID. Must be a 17-digit number")]
	InvalidSteamID,

	/// Leetify answered with an error status other than 404.
	#[error("Leetify API error: {}", status.as_u16())]
	Upstream
	{
		/// The status Leetify answered with.
		status: http::StatusCode,
	},

	/// We failed to make an HTTP request to Leetify.
	#[error("failed to make http request to leetify")]
	Http(#[from] reqwest::Error),

	/// An error that was shared between concurrent callers of the same cached
	/// request.
	#[error(transparent)]
	Shared(Arc<Error>),
}

impl From<Arc<Error>> for Error
{
	/// Variants without a payload are rebuilt instead of staying wrapped, since
	/// the cache still holds a reference to the error.
	fn from(error: Arc<Error>) -> Self
	{
		let shared = match Arc::try_unwrap(error) {
			Ok(error) => return error,
			Err(shared) => shared,
		};

		match *shared {
			Self::MissingSteamID => Self::MissingSteamID,
			Self::InvalidSteamID => Self::InvalidSteamID,
			Self::Upstream { status } => Self::Upstream { status },
			Self::Http(_) | Self::Shared(_) => Self::Shared(Arc::clone(&shared)),
		}
	}
}

impl IntoErrorResponse for Error
{
	fn error_kind(&self) -> ErrorKind
	{
		match self {
			Self::MissingSteamID => ErrorKind::MissingInput,
			Self::InvalidSteamID => ErrorKind::InvalidInput,
			Self::Upstream { .. } => ErrorKind::ExternalService,
			Self::Http(source) => source.error_kind(),
			Self::Shared(source) => source.error_kind(),
		}
	}
}
