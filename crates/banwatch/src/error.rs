//! The errors that can occur when parsing user input.

use thiserror::Error;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error
{
	/// The input was not a 17-digit Steam64 ID.
	#[error("`{input}` is not a valid Steam64 ID")]
	InvalidSteamID
	{
		/// The rejected input.
		input: String,
	},

	/// The input was neither a SteamID, a profile URL, nor a vanity name.
	#[error("`{input}` is not a Steam profile URL, vanity name, or Steam64 ID")]
	InvalidIdentifier
	{
		/// The rejected input.
		input: String,
	},
}
