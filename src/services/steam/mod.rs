//! The [`SteamService`] is responsible for communicating with Steam.
//!
//! It can resolve vanity URLs, fetch friend lists, and fetch player summaries
//! and ban information for arbitrarily many players. Every request is cached.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use banwatch::SteamID;
use futures::future;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cache::TtlCache;

mod error;
pub use error::{Error, Result};

pub(crate) mod models;
pub use models::{SteamPlayer, VACBanInfo};

/// The maximum amount of SteamIDs Steam accepts in a single batch request.
pub const STEAM_BATCH_SIZE: usize = 100;

/// The example value from `.env.example`.
const PLACEHOLDER_API_KEY: &str = "your_steam_api_key_here";

/// Endpoint for resolving vanity URLs.
const RESOLVE_VANITY_URL: &str = "ISteamUser/ResolveVanityURL/v1/";

/// Endpoint for fetching a user's friends.
const GET_FRIEND_LIST: &str = "ISteamUser/GetFriendList/v1/";

/// Endpoint for fetching player summaries.
const GET_PLAYER_SUMMARIES: &str = "ISteamUser/GetPlayerSummaries/v2/";

/// Endpoint for fetching ban information.
const GET_PLAYER_BANS: &str = "ISteamUser/GetPlayerBans/v1/";

/// A service for interacting with Steam.
#[derive(Clone)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct SteamService
{
	api_url: Arc<str>,
	api_key: Option<Arc<str>>,
	http_client: reqwest::Client,
	vanity_urls: TtlCache<String, Option<SteamID>>,
	friend_lists: TtlCache<SteamID, Vec<SteamID>>,
	player_summaries: TtlCache<Vec<SteamID>, Vec<SteamPlayer>>,
	ban_statuses: TtlCache<Vec<SteamID>, Vec<VACBanInfo>>,
}

impl fmt::Debug for SteamService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("SteamService")
			.field("api_url", &self.api_url)
			.finish_non_exhaustive()
	}
}

impl SteamService
{
	/// Creates a new [`SteamService`].
	///
	/// An empty `api_key` is treated the same as a missing one.
	pub fn new(
		api_url: &Url,
		api_key: Option<String>,
		http_client: reqwest::Client,
		cache_ttl: Duration,
		cache_capacity: u64,
	) -> Self
	{
		Self {
			api_url: api_url.as_str().trim_end_matches('/').into(),
			api_key: api_key
				.filter(|key| !key.trim().is_empty())
				.map(Into::into),
			http_client,
			vanity_urls: TtlCache::new("steam.vanity_urls", cache_ttl, cache_capacity),
			friend_lists: TtlCache::new("steam.friend_lists", cache_ttl, cache_capacity),
			player_summaries: TtlCache::new("steam.player_summaries", cache_ttl, cache_capacity),
			ban_statuses: TtlCache::new("steam.ban_statuses", cache_ttl, cache_capacity),
		}
	}

	/// Returns the configured API key.
	///
	/// This fails if there is no key, or if it is still the placeholder from
	/// `.env.example`.
	pub fn api_key(&self) -> Result<&str>
	{
		match self.api_key.as_deref() {
			None => Err(Error::MissingApiKey),
			Some(PLACEHOLDER_API_KEY) => Err(Error::PlaceholderApiKey),
			Some(key) => Ok(key),
		}
	}

	/// Resolves a vanity URL slug to a SteamID.
	///
	/// Returns `Ok(None)` if Steam does not know the slug, or answers with an
	/// error status.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn resolve_vanity_url(&self, vanity: &str) -> Result<Option<SteamID>>
	{
		self.vanity_urls
			.get_or_try_fetch(vanity.to_owned(), self.request_vanity_url(vanity))
			.await
			.map_err(Error::from)
	}

	/// Fetches the SteamIDs of a user's friends.
	///
	/// Private profiles and failed requests produce an empty list. Only a
	/// missing or placeholder API key is reported as an error.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_friend_list(&self, steam_id: SteamID) -> Result<Vec<SteamID>>
	{
		match self
			.friend_lists
			.get_or_try_fetch(steam_id, self.request_friend_list(steam_id))
			.await
			.map_err(Error::from)
		{
			Ok(friends) => Ok(friends),
			Err(error) if error.is_missing_api_key() => Err(error),
			Err(error) => {
				tracing::warn!(%error, %steam_id, "failed to fetch friend list");
				Ok(Vec::new())
			}
		}
	}

	/// Fetches player summaries for every SteamID in `steam_ids`.
	///
	/// Requests are split into batches of [`STEAM_BATCH_SIZE`] and sent
	/// concurrently. Results are in batch order. Any failure produces an
	/// empty list.
	#[tracing::instrument(level = "debug", skip(steam_ids), fields(count = steam_ids.len()))]
	pub async fn fetch_player_summaries(&self, steam_ids: &[SteamID]) -> Vec<SteamPlayer>
	{
		if steam_ids.is_empty() {
			return Vec::new();
		}

		let fetch = fetch_batched(steam_ids, |batch| self.request_player_summaries(batch));

		self.player_summaries
			.get_or_try_fetch(steam_ids.to_vec(), fetch)
			.await
			.unwrap_or_else(|error| {
				tracing::warn!(%error, "failed to fetch player summaries");
				Vec::new()
			})
	}

	/// Fetches ban information for every SteamID in `steam_ids`.
	///
	/// Batching and failure handling are the same as for
	/// [`SteamService::fetch_player_summaries()`].
	#[tracing::instrument(level = "debug", skip(steam_ids), fields(count = steam_ids.len()))]
	pub async fn fetch_ban_statuses(&self, steam_ids: &[SteamID]) -> Vec<VACBanInfo>
	{
		if steam_ids.is_empty() {
			return Vec::new();
		}

		let fetch = fetch_batched(steam_ids, |batch| self.request_ban_statuses(batch));

		self.ban_statuses
			.get_or_try_fetch(steam_ids.to_vec(), fetch)
			.await
			.unwrap_or_else(|error| {
				tracing::warn!(%error, "failed to fetch ban statuses");
				Vec::new()
			})
	}

	/// Builds the full URL for an endpoint.
	fn endpoint(&self, path: &str) -> String
	{
		format!("{}/{path}", self.api_url)
	}

	/// Resolves a vanity URL without going through the cache.
	async fn request_vanity_url(&self, vanity: &str) -> Result<Option<SteamID>>
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Serialize)]
		struct Query<'a>
		{
			key: &'a str,
			vanityurl: &'a str,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Body
		{
			#[serde(default)]
			response: VanityResponse,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Default, Deserialize)]
		struct VanityResponse
		{
			#[serde(default)]
			success: u32,
			steamid: Option<SteamID>,
		}

		let key = self.api_key()?;
		let url = self.endpoint(RESOLVE_VANITY_URL);

		tracing::debug!(%url, vanity, "making http request to steam");

		let response = self
			.http_client
			.get(url)
			.query(&Query { key, vanityurl: vanity })
			.send()
			.await?;

		if !response.status().is_success() {
			tracing::warn!(status = %response.status(), "failed to resolve vanity url");
			return Ok(None);
		}

		if !is_json(&response) {
			tracing::error!("steam returned a non-JSON response; check the API key");
			return Err(Error::InvalidApiKey);
		}

		let VanityResponse { success, steamid } = response.json::<Body>().await?.response;

		Ok(steamid.filter(|_| success == 1))
	}

	/// Fetches a friend list without going through the cache.
	///
	/// Non-OK responses mean the profile is private and produce `Ok(vec![])`,
	/// which is worth caching. Transport errors are not.
	async fn request_friend_list(&self, steam_id: SteamID) -> Result<Vec<SteamID>>
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Serialize)]
		struct Query<'a>
		{
			key: &'a str,
			steamid: SteamID,
			relationship: &'static str,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Body
		{
			friendslist: Option<FriendsList>,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct FriendsList
		{
			#[serde(default)]
			friends: Vec<Friend>,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Friend
		{
			steamid: SteamID,
		}

		let key = self.api_key()?;
		let url = self.endpoint(GET_FRIEND_LIST);

		tracing::debug!(%url, %steam_id, "making http request to steam");

		let response = self
			.http_client
			.get(url)
			.query(&Query { key, steamid: steam_id, relationship: "friend" })
			.send()
			.await?;

		if !response.status().is_success() {
			tracing::debug!(status = %response.status(), "friend list is private or unavailable");
			return Ok(Vec::new());
		}

		if !is_json(&response) {
			tracing::error!("steam returned a non-JSON response; check the API key");
			return Err(Error::InvalidApiKey);
		}

		let friends = response
			.json::<Body>()
			.await?
			.friendslist
			.map(|list| list.friends)
			.unwrap_or_default()
			.into_iter()
			.map(|friend| friend.steamid)
			.collect();

		Ok(friends)
	}

	/// Fetches player summaries for a single batch.
	async fn request_player_summaries(&self, batch: Vec<SteamID>) -> Result<Vec<SteamPlayer>>
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Body
		{
			response: Players,
		}

		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Players
		{
			#[serde(default)]
			players: Vec<SteamPlayer>,
		}

		let body = self
			.request_batch::<Body>(GET_PLAYER_SUMMARIES, &batch)
			.await?;

		Ok(body.response.players)
	}

	/// Fetches ban information for a single batch.
	async fn request_ban_statuses(&self, batch: Vec<SteamID>) -> Result<Vec<VACBanInfo>>
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Deserialize)]
		struct Body
		{
			#[serde(default)]
			players: Vec<VACBanInfo>,
		}

		let body = self.request_batch::<Body>(GET_PLAYER_BANS, &batch).await?;

		Ok(body.players)
	}

	/// Sends a `steamids=…` request for `batch` to `endpoint`.
	async fn request_batch<T>(&self, endpoint: &str, batch: &[SteamID]) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Serialize)]
		struct Query<'a>
		{
			key: &'a str,
			steamids: String,
		}

		let key = self.api_key()?;
		let url = self.endpoint(endpoint);
		let steamids = batch.iter().join(",");

		tracing::debug!(%url, size = batch.len(), "making http request to steam");

		let body = self
			.http_client
			.get(url)
			.query(&Query { key, steamids })
			.send()
			.await?
			.error_for_status()?
			.json::<T>()
			.await?;

		Ok(body)
	}
}

/// Splits `steam_ids` into batches of at most [`STEAM_BATCH_SIZE`].
///
/// Concatenating the batches yields the input again.
pub fn chunk_ids(steam_ids: &[SteamID]) -> Vec<Vec<SteamID>>
{
	steam_ids
		.chunks(STEAM_BATCH_SIZE)
		.map(<[SteamID]>::to_vec)
		.collect()
}

/// Runs `request` for every batch of `steam_ids` concurrently and
/// concatenates the results in batch order.
async fn fetch_batched<T, F, Fut>(steam_ids: &[SteamID], request: F) -> Result<Vec<T>>
where
	F: Fn(Vec<SteamID>) -> Fut,
	Fut: Future<Output = Result<Vec<T>>>,
{
	let batches = future::try_join_all(chunk_ids(steam_ids).into_iter().map(request)).await?;

	Ok(batches.into_iter().flatten().collect())
}

/// Checks whether a response claims to be JSON.
fn is_json(response: &reqwest::Response) -> bool
{
	response
		.headers()
		.get(http::header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.contains("application/json"))
}
