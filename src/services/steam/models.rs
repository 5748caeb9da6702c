//! Types returned by Steam's Web API.
//!
//! Field names match Steam's, since we pass these through to clients as-is.

use banwatch::SteamID;
use serde::{Deserialize, Serialize};

/// A player summary from `ISteamUser/GetPlayerSummaries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SteamPlayer
{
	/// The player's SteamID.
	pub steamid: SteamID,

	/// The player's display name.
	#[serde(default)]
	pub personaname: String,

	/// URL to the player's Steam profile.
	#[serde(default)]
	pub profileurl: String,

	/// 32x32 avatar.
	#[serde(default)]
	pub avatar: String,

	/// 64x64 avatar.
	#[serde(default)]
	pub avatarmedium: String,

	/// 184x184 avatar.
	#[serde(default)]
	pub avatarfull: String,
}

/// Ban information from `ISteamUser/GetPlayerBans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VACBanInfo
{
	/// The player's SteamID.
	pub steam_id: SteamID,

	/// Whether the player is banned from Steam Community.
	pub community_banned: bool,

	/// Whether the player has at least one VAC ban on record.
	#[serde(rename = "VACBanned")]
	pub vac_banned: bool,

	/// How many VAC bans the player has.
	#[serde(rename = "NumberOfVACBans")]
	pub number_of_vac_bans: u32,

	/// Days since the player's most recent ban.
	pub days_since_last_ban: u32,

	/// How many game bans the player has.
	pub number_of_game_bans: u32,

	/// The player's trade ban status, e.g. `none` or `probation`.
	pub economy_ban: String,
}

impl VACBanInfo
{
	/// Whether this player counts as banned: a VAC ban or at least one game
	/// ban.
	pub const fn is_banned(&self) -> bool
	{
		self.vac_banned || self.number_of_game_bans > 0
	}
}
