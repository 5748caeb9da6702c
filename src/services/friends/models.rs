//! Request/Response types for this service.

use axum::response::{IntoResponse, Response};
use banwatch::{Friend, SortOrder, SteamID};
use serde::{Deserialize, Serialize};

use crate::services::steam::{SteamPlayer, VACBanInfo};

/// Request payload for looking up a user's friends.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupFriendsRequest
{
	/// A profile URL, vanity name, or Steam64 ID.
	#[serde(default)]
	#[schema(example = "https://steamcommunity.com/id/AlphaKeks/")]
	pub profile_url: Option<String>,

	/// Only include friends whose name contains this.
	#[serde(default)]
	pub search: Option<String>,

	/// Order friends by how recently they were banned.
	#[serde(default)]
	pub sort: Option<SortOrder>,
}

/// A Steam player summary merged with the player's ban record.
///
/// The ban fields are absent if Steam returned no ban record for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FriendProfile
{
	/// The player summary.
	#[serde(flatten)]
	pub player: SteamPlayer,

	/// The SteamID from the ban record.
	#[serde(rename = "SteamId", skip_serializing_if = "Option::is_none")]
	pub steam_id: Option<SteamID>,

	/// Whether the player is banned from Steam Community.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub community_banned: Option<bool>,

	/// Whether the player has at least one VAC ban.
	#[serde(rename = "VACBanned", skip_serializing_if = "Option::is_none")]
	pub vac_banned: Option<bool>,

	/// How many VAC bans the player has.
	#[serde(rename = "NumberOfVACBans", skip_serializing_if = "Option::is_none")]
	pub number_of_vac_bans: Option<u32>,

	/// Days since the player's most recent ban.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub days_since_last_ban: Option<u32>,

	/// How many game bans the player has.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_game_bans: Option<u32>,

	/// The player's trade ban status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub economy_ban: Option<String>,
}

impl FriendProfile
{
	/// Merges a player summary with the player's ban record.
	pub fn merge(player: SteamPlayer, bans: Option<VACBanInfo>) -> Self
	{
		let Some(bans) = bans else {
			return Self {
				player,
				steam_id: None,
				community_banned: None,
				vac_banned: None,
				number_of_vac_bans: None,
				days_since_last_ban: None,
				number_of_game_bans: None,
				economy_ban: None,
			};
		};

		Self {
			player,
			steam_id: Some(bans.steam_id),
			community_banned: Some(bans.community_banned),
			vac_banned: Some(bans.vac_banned),
			number_of_vac_bans: Some(bans.number_of_vac_bans),
			days_since_last_ban: Some(bans.days_since_last_ban),
			number_of_game_bans: Some(bans.number_of_game_bans),
			economy_ban: Some(bans.economy_ban),
		}
	}

	/// Whether this player has a VAC ban or at least one game ban.
	pub fn is_banned(&self) -> bool
	{
		self.vac_banned == Some(true) || self.number_of_game_bans.is_some_and(|bans| bans > 0)
	}
}

impl Friend for FriendProfile
{
	fn name(&self) -> &str
	{
		&self.player.personaname
	}

	fn days_since_last_ban(&self) -> Option<u32>
	{
		self.days_since_last_ban
	}
}

/// Response payload for looking up a user's friends.
#[derive(Debug, Serialize, utoipa::ToSchema, utoipa::IntoResponses)]
#[serde(rename_all = "camelCase")]
#[response(status = OK)]
pub struct LookupFriendsResponse
{
	/// A human-readable summary.
	#[schema(example = "Found 3 friend(s) with VAC/Game bans")]
	pub message: String,

	/// The user whose friends were looked up.
	pub user_profile: Option<FriendProfile>,

	/// How many friends the user has, regardless of filtering.
	pub total_friends: usize,

	/// Every friend Steam returned a summary for.
	pub all_friends: Vec<FriendProfile>,

	/// The subset of `all_friends` that is banned.
	pub banned_friends: Vec<FriendProfile>,
}

impl IntoResponse for LookupFriendsResponse
{
	fn into_response(self) -> Response
	{
		crate::http::extract::Json(self).into_response()
	}
}
