//! Turning free-form user input into something we can look up on Steam.
//!
//! Users paste all sorts of things into the search bar: raw Steam64 IDs,
//! `steamcommunity.com/profiles/…` links, `steamcommunity.com/id/…` links, or
//! just the vanity slug on its own. [`ProfileIdentifier::parse()`] normalizes
//! all of these.

use std::fmt;

use lazy_regex::{regex_captures, regex_is_match};

use crate::{Error, Result, SteamID};

/// A parsed profile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileIdentifier
{
	/// A Steam64 ID that can be used directly.
	SteamID(SteamID),

	/// A vanity URL slug that still has to be resolved through Steam.
	Vanity(String),
}

impl ProfileIdentifier
{
	/// Parses user input into a [`ProfileIdentifier`].
	///
	/// Leading and trailing whitespace is ignored. The input is tested, in
	/// order, for:
	///
	/// 1. a bare 17-digit Steam64 ID
	/// 2. a `steamcommunity.com/profiles/<id>` URL
	/// 3. a `steamcommunity.com/id/<vanity>` URL
	/// 4. a bare vanity name (`[a-zA-Z0-9_-]+`, leading `.` and `/` stripped)
	pub fn parse(input: &str) -> Result<Self>
	{
		let input = input.trim();

		if let Ok(steam_id) = input.parse::<SteamID>() {
			return Ok(Self::SteamID(steam_id));
		}

		if let Some((_, steam_id)) =
			regex_captures!(r"steamcommunity\.com/profiles/([0-9]{17})", input)
		{
			return steam_id.parse().map(Self::SteamID);
		}

		if let Some((_, vanity)) = regex_captures!(r"steamcommunity\.com/id/([^/]+)", input) {
			return Ok(Self::from_slug(vanity));
		}

		let vanity = input.trim_start_matches(['.', '/']);

		if regex_is_match!(r"^[a-zA-Z0-9_-]+$", vanity) {
			return Ok(Self::from_slug(vanity));
		}

		Err(Error::InvalidIdentifier { input: input.to_owned() })
	}

	/// Returns the SteamID, if this identifier does not need resolving.
	pub fn as_steam_id(&self) -> Option<SteamID>
	{
		match self {
			Self::SteamID(steam_id) => Some(*steam_id),
			Self::Vanity(_) => None,
		}
	}

	/// Vanity slugs that happen to be 17 digits are treated as IDs, since
	/// Steam does not allow vanity names in that shape.
	fn from_slug(slug: &str) -> Self
	{
		match slug.parse::<SteamID>() {
			Ok(steam_id) => Self::SteamID(steam_id),
			Err(_) => Self::Vanity(slug.to_owned()),
		}
	}
}

impl fmt::Display for ProfileIdentifier
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::SteamID(steam_id) => fmt::Display::fmt(steam_id, f),
			Self::Vanity(vanity) => f.write_str(vanity),
		}
	}
}
