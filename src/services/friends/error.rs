//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::http::{ErrorKind, IntoErrorResponse};
use crate::services::steam;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when looking up a user's friends.
#[derive(Debug, Error)]
pub enum Error
{
	/// The request did not include a profile URL.
	#[error("Profile URL is required")]
	MissingProfileUrl,

	/// The profile URL could not be parsed, or its vanity name does not
	/// exist.
	#[error("Invalid Steam profile URL")]
	InvalidProfileUrl,

	/// Steam could not be reached, or rejected our API key.
	#[error(transparent)]
	Steam(#[from] steam::Error),
}

impl IntoErrorResponse for Error
{
	fn error_kind(&self) -> ErrorKind
	{
		match self {
			Self::MissingProfileUrl => ErrorKind::MissingInput,
			Self::InvalidProfileUrl => ErrorKind::InvalidInput,
			Self::Steam(source) => source.error_kind(),
		}
	}
}
