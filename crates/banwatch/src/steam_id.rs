//! The [`SteamID`] type.
//!
//! Steam's Web API identifies accounts by their 64-bit ID, always rendered as
//! a 17-digit decimal string (e.g. `76561198282622073`). Other SteamID formats
//! (`STEAM_1:1:…`, `[U:1:…]`) are not accepted anywhere in banwatch.

use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_is_match;

use crate::{Error, Result};

/// A Steam64 ID.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamID(u64);

impl SteamID
{
	/// The amount of decimal digits in a Steam64 ID.
	pub const DIGITS: usize = 17;

	/// Checks whether `input` is exactly 17 ASCII digits.
	pub fn is_valid(input: &str) -> bool
	{
		regex_is_match!(r"^[0-9]{17}$", input)
	}

	/// Returns the raw 64-bit value.
	pub const fn as_u64(self) -> u64
	{
		self.0
	}
}

impl fmt::Display for SteamID
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "{:017}", self.0)
	}
}

impl FromStr for SteamID
{
	type Err = Error;

	fn from_str(input: &str) -> Result<Self>
	{
		if !Self::is_valid(input) {
			return Err(Error::InvalidSteamID { input: input.to_owned() });
		}

		input
			.parse::<u64>()
			.map(Self)
			.map_err(|_| Error::InvalidSteamID { input: input.to_owned() })
	}
}

impl TryFrom<u64> for SteamID
{
	type Error = Error;

	fn try_from(value: u64) -> Result<Self>
	{
		value.to_string().parse()
	}
}

impl From<SteamID> for u64
{
	fn from(steam_id: SteamID) -> Self
	{
		steam_id.0
	}
}

/// Serde implementations.
///
/// SteamIDs are serialized as strings, because JavaScript clients cannot
/// represent 64-bit integers losslessly. Deserialization accepts both.
#[cfg(feature = "serde")]
mod serde_impls
{
	use std::fmt;

	use serde::de::{self, Deserialize, Deserializer, Visitor};
	use serde::ser::{Serialize, Serializer};

	use super::SteamID;

	impl Serialize for SteamID
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.collect_str(self)
		}
	}

	impl<'de> Deserialize<'de> for SteamID
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			/// Visitor accepting strings and unsigned integers.
			struct SteamIDVisitor;

			impl Visitor<'_> for SteamIDVisitor
			{
				type Value = SteamID;

				fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
				{
					f.write_str("a 17-digit Steam64 ID")
				}

				fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
				where
					E: de::Error,
				{
					value.parse().map_err(E::custom)
				}

				fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
				where
					E: de::Error,
				{
					SteamID::try_from(value).map_err(E::custom)
				}
			}

			deserializer.deserialize_any(SteamIDVisitor)
		}
	}
}

/// OpenAPI schema for [`SteamID`].
#[cfg(feature = "utoipa")]
mod utoipa_impls
{
	use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaType};
	use utoipa::openapi::RefOr;
	use utoipa::ToSchema;

	use super::SteamID;

	impl<'s> ToSchema<'s> for SteamID
	{
		fn schema() -> (&'s str, RefOr<Schema>)
		{
			let schema = ObjectBuilder::new()
				.schema_type(SchemaType::String)
				.description(Some("a Steam64 ID"))
				.pattern(Some("^[0-9]{17}$"))
				.build();

			("SteamID", schema.into())
		}
	}
}
