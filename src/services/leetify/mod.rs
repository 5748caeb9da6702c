//! A service for fetching CS2 performance stats from Leetify.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use banwatch::{MatchStat, MatchStatsResult, SteamID, MAX_MATCHES};
use serde::Serialize;
use url::Url;

use crate::cache::TtlCache;

pub(crate) mod http;

mod error;
pub use error::{Error, Result};

pub(crate) mod models;
pub use models::{FetchStatsRequest, FetchStatsResponse, LeetifyProfileResponse};

mod display;
pub use display::{transform, GameOutcome, LeetifyDisplayStats, SkillData};

/// Header carrying the Leetify API key.
const API_KEY_HEADER: &str = "_leetify_key";

/// A service for fetching stats from Leetify.
#[derive(Clone)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct LeetifyService
{
	api_url: Arc<str>,
	api_key: Option<Arc<str>>,
	http_client: reqwest::Client,
	profiles: TtlCache<SteamID, Option<LeetifyProfileResponse>>,
	matches: TtlCache<SteamID, Option<Vec<MatchStat>>>,
}

impl fmt::Debug for LeetifyService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("LeetifyService")
			.field("api_url", &self.api_url)
			.field("authenticated", &self.api_key.is_some())
			.finish_non_exhaustive()
	}
}

impl LeetifyService
{
	/// Creates a new [`LeetifyService`].
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
			profiles: TtlCache::new("leetify.profiles", cache_ttl, cache_capacity),
			matches: TtlCache::new("leetify.matches", cache_ttl, cache_capacity),
		}
	}

	/// Fetches a player's stats and prepares them for display.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_stats(&self, req: FetchStatsRequest) -> Result<FetchStatsResponse>
	{
		let steam_id = req
			.steam_id
			.filter(|steam_id| !steam_id.is_empty())
			.ok_or(Error::MissingSteamID)?
			.parse::<SteamID>()
			.map_err(|_| Error::InvalidSteamID)?;

		let Some(profile) = self.fetch_profile(steam_id).await? else {
			return Ok(FetchStatsResponse {
				stats: None,
				message: Some(String::from("Profile not found on Leetify")),
			});
		};

		let matches = self.fetch_matches(steam_id).await?.unwrap_or_default();
		let match_stats = MatchStatsResult::calculate(&matches);

		Ok(FetchStatsResponse { stats: Some(transform(profile, &match_stats)), message: None })
	}

	/// Fetches a player's Leetify profile.
	///
	/// Returns `Ok(None)` if Leetify doesn't know the player.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_profile(&self, steam_id: SteamID) -> Result<Option<LeetifyProfileResponse>>
	{
		self.profiles
			.get_or_try_fetch(steam_id, self.request_profile(steam_id))
			.await
			.map_err(Error::from)
	}

	/// Fetches a player's stats from their most recent matches.
	///
	/// At most [`MAX_MATCHES`] are returned, skipping matches that have no
	/// stats for the player. Returns `Ok(None)` if Leetify answers with an
	/// error status.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_matches(&self, steam_id: SteamID) -> Result<Option<Vec<MatchStat>>>
	{
		self.matches
			.get_or_try_fetch(steam_id, self.request_matches(steam_id))
			.await
			.map_err(Error::from)
	}

	/// Sends a GET request for `path`, authenticated if we have a key.
	async fn get(&self, path: &str, steam_id: SteamID) -> Result<reqwest::Response>
	{
		#[allow(clippy::missing_docs_in_private_items)]
		#[derive(Serialize)]
		struct Query
		{
			steam64_id: SteamID,
		}

		let url = format!("{}{path}", self.api_url);

		tracing::debug!(%url, %steam_id, "making http request to leetify");

		let mut request = self
			.http_client
			.get(url)
			.query(&Query { steam64_id: steam_id });

		if let Some(key) = self.api_key.as_deref() {
			request = request.header(API_KEY_HEADER, key);
		}

		Ok(request.send().await?)
	}

	/// Fetches a profile without going through the cache.
	async fn request_profile(&self, steam_id: SteamID) -> Result<Option<LeetifyProfileResponse>>
	{
		let response = self.get("/v3/profile", steam_id).await?;
		let status = response.status();

		if status == reqwest::StatusCode::NOT_FOUND {
			return Ok(None);
		}

		if !status.is_success() {
			return Err(Error::Upstream { status });
		}

		Ok(Some(response.json().await?))
	}

	/// Fetches match stats without going through the cache.
	async fn request_matches(&self, steam_id: SteamID) -> Result<Option<Vec<MatchStat>>>
	{
		let response = self.get("/v3/profile/matches", steam_id).await?;

		if !response.status().is_success() {
			tracing::debug!(status = %response.status(), "no match history");
			return Ok(None);
		}

		let player = steam_id.to_string();
		let stats = response
			.json::<Vec<models::RawMatch>>()
			.await?
			.into_iter()
			.filter_map(|raw| {
				raw.stats?
					.into_iter()
					.find(|stat| stat.steam64_id.as_deref() == Some(player.as_str()))
			})
			.take(MAX_MATCHES)
			.map(MatchStat::from)
			.collect();

		Ok(Some(stats))
	}
}
