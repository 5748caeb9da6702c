//! This module contains helpers for unit tests.
//!
//! Most of them revolve around [`FakeUpstream`], a tiny HTTP server that
//! pretends to be both Steam's Web API and Leetify's public API, and counts
//! how often each endpoint was hit.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::{routing, Router};
use banwatch::SteamID;
use color_eyre::eyre::WrapErr;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

use crate::runtime::Config;
use crate::services::{FriendService, LeetifyService, SteamService};

/// A public profile with 150 friends, 30 of which are banned.
pub const USER_ID: &str = "76561198282622073";

/// A profile whose friend list is private.
pub const PRIVATE_ID: &str = "76561197960287930";

/// A profile whose friend list request returns HTML.
pub const HTML_ID: &str = "76561197960265728";

/// Steam answers vanity lookups for this slug with a 403.
pub const FORBIDDEN_VANITY: &str = "forbidden";

/// Steam answers vanity lookups for this slug with an empty JSON object.
pub const EMPTY_VANITY: &str = "emptybody";

/// Leetify answers with a 500 for this player.
pub const LEETIFY_ERROR_ID: &str = "76561198000000999";

/// Friends of [`USER_ID`] are `FRIEND_BASE + 0..FRIEND_COUNT`.
pub const FRIEND_BASE: u64 = 76561198000000000;

/// How many friends [`USER_ID`] has.
pub const FRIEND_COUNT: u64 = 150;

/// Parses a SteamID constant.
pub fn steam_id(s: &str) -> SteamID
{
	s.parse().expect("valid steam id")
}

/// Per-endpoint request counters.
#[derive(Debug, Default)]
pub struct Hits
{
	pub vanity: AtomicUsize,
	pub friends: AtomicUsize,
	pub summaries: AtomicUsize,
	pub bans: AtomicUsize,
	pub leetify_profile: AtomicUsize,
	pub leetify_matches: AtomicUsize,
}

/// Reads a counter.
pub fn hits(counter: &AtomicUsize) -> usize
{
	counter.load(Ordering::SeqCst)
}

/// A running fake upstream server.
#[derive(Debug)]
pub struct FakeUpstream
{
	pub url: Url,
	pub hits: Arc<Hits>,
}

impl FakeUpstream
{
	/// Binds to a random local port and starts serving in the background.
	pub async fn spawn() -> color_eyre::Result<Self>
	{
		let hits = Arc::new(Hits::default());
		let router = Router::new()
			.route("/ISteamUser/ResolveVanityURL/v1/", routing::get(resolve_vanity_url))
			.route("/ISteamUser/GetFriendList/v1/", routing::get(get_friend_list))
			.route("/ISteamUser/GetPlayerSummaries/v2/", routing::get(get_player_summaries))
			.route("/ISteamUser/GetPlayerBans/v1/", routing::get(get_player_bans))
			.route("/v3/profile", routing::get(leetify_profile))
			.route("/v3/profile/matches", routing::get(leetify_matches))
			.with_state(Arc::clone(&hits));

		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr: SocketAddr = listener.local_addr()?;

		tokio::spawn(async move { axum::serve(listener, router).await });

		let url = format!("http://{addr}").parse::<Url>()?;

		Ok(Self { url, hits })
	}

	/// A [`Config`] pointing every upstream at this server.
	pub fn config(&self) -> Config
	{
		Config {
			addr: "127.0.0.1:0".parse().expect("valid socket addr"),
			steam_api_key: Some(String::from("test-key")),
			steam_api_url: self.url.clone(),
			leetify_api_key: None,
			leetify_api_url: self.url.clone(),
			steam_cache_ttl: 3600,
			leetify_cache_ttl: 1800,
			cache_capacity: 1000,
			log_dir: None,
			log_filter: String::from("banwatch_api=debug"),
		}
	}

	/// A [`SteamService`] talking to this server.
	pub fn steam_svc(&self, api_key: Option<&str>) -> SteamService
	{
		SteamService::new(
			&self.url,
			api_key.map(String::from),
			reqwest::Client::new(),
			Duration::from_secs(3600),
			1000,
		)
	}

	/// A [`LeetifyService`] talking to this server.
	pub fn leetify_svc(&self) -> LeetifyService
	{
		LeetifyService::new(
			&self.url,
			Some(String::from("leetify-key")),
			reqwest::Client::new(),
			Duration::from_secs(1800),
			1000,
		)
	}

	/// A [`FriendService`] talking to this server.
	pub fn friend_svc(&self, api_key: Option<&str>) -> FriendService
	{
		FriendService::new(self.steam_svc(api_key))
	}
}

/// Deserializes a response body as JSON.
pub async fn parse_body<T>(body: axum::body::Body) -> color_eyre::Result<T>
where
	T: DeserializeOwned,
{
	let bytes = axum::body::to_bytes(body, usize::MAX)
		.await
		.context("read response body")?;

	serde_json::from_slice(&bytes).context("deserialize response body")
}

/// Builds a POST request with a JSON body.
pub fn post_json(uri: &str, body: serde_json::Value) -> color_eyre::Result<axum::extract::Request>
{
	axum::extract::Request::builder()
		.method(http::Method::POST)
		.uri(uri)
		.header(http::header::CONTENT_TYPE, "application/json")
		.body(axum::body::Body::from(body.to_string()))
		.context("build request")
}

type Params = Query<HashMap<String, String>>;

fn param<'a>(params: &'a Params, name: &str) -> &'a str
{
	params.get(name).map_or("", String::as_str)
}

fn ids(params: &Params) -> Vec<u64>
{
	param(params, "steamids")
		.split(',')
		.filter_map(|id| id.parse().ok())
		.collect()
}

/// Which of [`USER_ID`]'s friends `id` is, if any.
fn friend_index(id: u64) -> Option<u64>
{
	id.checked_sub(FRIEND_BASE)
		.filter(|index| *index < FRIEND_COUNT)
}

async fn resolve_vanity_url(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.vanity.fetch_add(1, Ordering::SeqCst);

	match param(&params, "vanityurl") {
		"htmlpage" => ([(http::header::CONTENT_TYPE, "text/html")], "<html>Forbidden</html>")
			.into_response(),
		FORBIDDEN_VANITY => http::StatusCode::FORBIDDEN.into_response(),
		EMPTY_VANITY => axum::Json(json!({})).into_response(),
		"alphakeks" => axum::Json(json!({
			"response": { "steamid": USER_ID, "success": 1 }
		}))
		.into_response(),
		_ => axum::Json(json!({
			"response": { "success": 42, "message": "No match" }
		}))
		.into_response(),
	}
}

async fn get_friend_list(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.friends.fetch_add(1, Ordering::SeqCst);

	match param(&params, "steamid") {
		USER_ID => {
			let friends = (0..FRIEND_COUNT)
				.map(|i| json!({
					"steamid": (FRIEND_BASE + i).to_string(),
					"relationship": "friend",
					"friend_since": 1_500_000_000 + i,
				}))
				.collect::<Vec<_>>();

			axum::Json(json!({ "friendslist": { "friends": friends } })).into_response()
		}
		HTML_ID => ([(http::header::CONTENT_TYPE, "text/html")], "<html>Forbidden</html>")
			.into_response(),
		_ => http::StatusCode::UNAUTHORIZED.into_response(),
	}
}

async fn get_player_summaries(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.summaries.fetch_add(1, Ordering::SeqCst);

	let ids = ids(&params);

	if ids.len() > 100 {
		return http::StatusCode::BAD_REQUEST.into_response();
	}

	let players = ids
		.into_iter()
		.map(|id| {
			let name = match friend_index(id) {
				Some(index) => format!("friend #{index}"),
				None => String::from("AlphaKeks"),
			};

			json!({
				"steamid": id.to_string(),
				"personaname": name,
				"profileurl": format!("https://steamcommunity.com/profiles/{id}/"),
				"avatar": "https://avatars.steamstatic.com/a.jpg",
				"avatarmedium": "https://avatars.steamstatic.com/a_medium.jpg",
				"avatarfull": "https://avatars.steamstatic.com/a_full.jpg",
				"communityvisibilitystate": 3,
			})
		})
		.collect::<Vec<_>>();

	axum::Json(json!({ "response": { "players": players } })).into_response()
}

/// Every 10th friend is VAC banned, every 10th friend offset by 5 is game
/// banned. Bans happened `index` days ago.
async fn get_player_bans(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.bans.fetch_add(1, Ordering::SeqCst);

	let ids = ids(&params);

	if ids.len() > 100 {
		return http::StatusCode::BAD_REQUEST.into_response();
	}

	let players = ids
		.into_iter()
		.map(|id| {
			let index = friend_index(id);
			let vac_banned = index.is_some_and(|i| i % 10 == 0);
			let game_bans = u64::from(index.is_some_and(|i| i % 10 == 5));
			let days = index.filter(|_| vac_banned || game_bans > 0).unwrap_or_default();

			json!({
				"SteamId": id.to_string(),
				"CommunityBanned": false,
				"VACBanned": vac_banned,
				"NumberOfVACBans": u64::from(vac_banned),
				"DaysSinceLastBan": days,
				"NumberOfGameBans": game_bans,
				"EconomyBan": "none",
			})
		})
		.collect::<Vec<_>>();

	axum::Json(json!({ "players": players })).into_response()
}

async fn leetify_profile(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.leetify_profile.fetch_add(1, Ordering::SeqCst);

	match param(&params, "steam64_id") {
		USER_ID => axum::Json(json!({
			"privacy_mode": "public",
			"winrate": 0.5349,
			"total_matches": 1234,
			"first_match_date": "2021-09-12T17:43:01.000Z",
			"name": "AlphaKeks",
			"bans": [],
			"steam64_id": USER_ID,
			"id": "a1b2c3",
			"ranks": {
				"leetify": 2.3456,
				"premier": 18500,
				"faceit": 8,
				"faceit_elo": 1780,
				"wingman": null,
				"renown": null,
				"competitive": [
					{ "map_name": "de_mirage", "rank": 15 },
					{ "map_name": "de_inferno", "rank": 12 },
				],
			},
			"rating": {
				"aim": 72.6,
				"positioning": 49.4,
				"utility": 30.0,
				"clutch": 0.12,
				"opening": 0.556,
				"ct_leetify": 0.01,
				"t_leetify": -0.02,
			},
			"stats": {
				"accuracy_enemy_spotted": 38.7,
				"accuracy_head": 21.2,
				"preaim": 7.456,
				"reaction_time_ms": 612.4,
				"spray_accuracy": 41.5,
			},
			"recent_games": [
				{ "game_id": "1", "map_name": "de_mirage", "result": "win" },
				{ "game_id": "2", "map_name": "de_mirage", "result": "loss" },
				{ "game_id": "3", "map_name": "de_nuke", "result": "tie" },
				{ "game_id": "4", "map_name": "de_nuke", "result": "win" },
			],
		}))
		.into_response(),
		LEETIFY_ERROR_ID => http::StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		_ => http::StatusCode::NOT_FOUND.into_response(),
	}
}

async fn leetify_matches(State(hits): State<Arc<Hits>>, params: Params) -> Response
{
	hits.leetify_matches.fetch_add(1, Ordering::SeqCst);

	if param(&params, "steam64_id") != USER_ID {
		return http::StatusCode::NOT_FOUND.into_response();
	}

	axum::Json(json!([
		{
			"id": "m1",
			"stats": [
				{ "steam64_id": "76561198000000001", "total_kills": 99 },
				{
					"steam64_id": USER_ID,
					"total_kills": 20,
					"total_deaths": 10,
					"total_hs_kills": 10,
					"dpr": 100.0,
					"rounds_count": 20,
					"total_damage": 2000,
				},
			],
		},
		{
			"id": "m2",
			"stats": [
				{
					"steam64_id": USER_ID,
					"total_kills": 10,
					"total_deaths": 20,
					"total_hs_kills": 5,
					"rounds_count": 10,
					"total_damage": 1000,
				},
			],
		},
		{
			"id": "m3",
			"stats": [{ "steam64_id": "76561198000000002", "total_kills": 30 }],
		},
		{ "id": "m4", "stats": null },
	]))
	.into_response()
}

/// Global constructor that will run before tests.
#[ctor::ctor]
fn ctor()
{
	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::EnvFilter;

	color_eyre::install().expect("failed to install color-eyre");
	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_test_writer()
		.with_env_filter(EnvFilter::from_default_env())
		.init();
}

macro_rules! assert {
	($expr:expr $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!($expr $(, $($msg)*)?)
	};
}

macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if lhs != rhs {
					::color_eyre::eyre::bail!(
						"assertion `{} == {}` failed\n  lhs: {lhs:?}\n  rhs: {rhs:?}",
						stringify!($lhs),
						stringify!($rhs),
					);
				}
			}
		}
	};
}

macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $cond:expr)? $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!(matches!($expr, $pat $(if $cond)?) $(, $($msg)*)?)
	};
}

pub(crate) use {assert, assert_eq, assert_matches};
