//! A service for checking a user's friends for bans.
//!
//! This is the main thing banwatch does. A lookup resolves the user, fetches
//! their friend list, and then fetches summaries and ban records for every
//! friend, all through [`SteamService`] and its caches.

use std::collections::HashMap;
use std::fmt;

use banwatch::{ProfileIdentifier, SteamID};

use crate::services::steam::{SteamPlayer, VACBanInfo};
use crate::services::SteamService;

pub(crate) mod http;

mod error;
pub use error::{Error, Result};

pub(crate) mod models;
pub use models::{FriendProfile, LookupFriendsRequest, LookupFriendsResponse};

/// A service for checking a user's friends for bans.
#[derive(Clone)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct FriendService
{
	steam_svc: SteamService,
}

impl fmt::Debug for FriendService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("FriendService").finish_non_exhaustive()
	}
}

impl FriendService
{
	/// Create a new [`FriendService`].
	#[tracing::instrument]
	pub fn new(steam_svc: SteamService) -> Self
	{
		Self { steam_svc }
	}

	/// Looks up a user's friends and their ban status.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn lookup(&self, req: LookupFriendsRequest) -> Result<LookupFriendsResponse>
	{
		self.steam_svc.api_key()?;

		let profile_url = req
			.profile_url
			.filter(|url| !url.is_empty())
			.ok_or(Error::MissingProfileUrl)?;

		let steam_id = self.resolve(&profile_url).await?;

		let user = [steam_id];
		let (user_summaries, user_bans, friend_ids) = futures::join!(
			self.steam_svc.fetch_player_summaries(&user),
			self.steam_svc.fetch_ban_statuses(&user),
			self.steam_svc.fetch_friend_list(steam_id),
		);

		let user_profile = merge(user_summaries, user_bans).into_iter().next();
		let friend_ids = friend_ids?;

		if friend_ids.is_empty() {
			return Ok(LookupFriendsResponse {
				message: String::from("No friends found or profile is private"),
				user_profile,
				total_friends: 0,
				all_friends: Vec::new(),
				banned_friends: Vec::new(),
			});
		}

		let (bans, summaries) = futures::join!(
			self.steam_svc.fetch_ban_statuses(&friend_ids),
			self.steam_svc.fetch_player_summaries(&friend_ids),
		);

		let mut all_friends = merge(summaries, bans);
		let mut banned_friends = all_friends
			.iter()
			.filter(|friend| friend.is_banned())
			.cloned()
			.collect::<Vec<_>>();

		let message = format!("Found {} friend(s) with VAC/Game bans", banned_friends.len());

		if req.search.is_some() || req.sort.is_some() {
			let search = req.search.unwrap_or_default();
			let order = req.sort.unwrap_or_default();

			all_friends = banwatch::filter_and_sort(all_friends, &search, order);
			banned_friends = banwatch::filter_and_sort(banned_friends, &search, order);
		}

		tracing::debug!(
			%steam_id,
			friends = friend_ids.len(),
			banned = banned_friends.len(),
			"looked up friends",
		);

		Ok(LookupFriendsResponse {
			message,
			user_profile,
			total_friends: friend_ids.len(),
			all_friends,
			banned_friends,
		})
	}

	/// Turns user input into a SteamID, resolving vanity names through Steam.
	async fn resolve(&self, profile_url: &str) -> Result<SteamID>
	{
		let identifier =
			ProfileIdentifier::parse(profile_url).map_err(|_| Error::InvalidProfileUrl)?;

		match identifier {
			ProfileIdentifier::SteamID(steam_id) => Ok(steam_id),
			ProfileIdentifier::Vanity(vanity) => self
				.steam_svc
				.resolve_vanity_url(&vanity)
				.await?
				.ok_or(Error::InvalidProfileUrl),
		}
	}
}

/// Pairs every player summary with the ban record for the same SteamID.
///
/// Order follows `summaries`.
fn merge(summaries: Vec<SteamPlayer>, bans: Vec<VACBanInfo>) -> Vec<FriendProfile>
{
	let bans = bans
		.into_iter()
		.map(|info| (info.steam_id, info))
		.collect::<HashMap<_, _>>();

	summaries
		.into_iter()
		.map(|player| {
			let info = bans.get(&player.steamid).cloned();
			FriendProfile::merge(player, info)
		})
		.collect()
}
