//! Request/Response types for this service, plus the raw shapes of Leetify's
//! responses.
//!
//! Leetify omits fields freely, so everything we read from it is optional.

use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::LeetifyDisplayStats;

/// A player's profile on Leetify, as returned by `GET /v3/profile`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeetifyProfileResponse
{
	/// `public`, `private`, etc.
	pub privacy_mode: Option<String>,

	/// Fraction of matches won, `0.0..=1.0`.
	pub winrate: Option<f64>,

	/// Total amount of matches Leetify knows about.
	pub total_matches: Option<u64>,

	/// ISO 8601 timestamp.
	pub first_match_date: Option<String>,

	/// The player's name on Leetify.
	pub name: Option<String>,

	/// The player's Steam64 ID.
	pub steam64_id: Option<String>,

	/// Leetify's internal ID.
	pub id: Option<String>,

	/// Ranks across matchmaking systems.
	pub ranks: Option<LeetifyRanks>,

	/// Leetify's skill ratings.
	pub rating: Option<LeetifyRating>,

	/// Aggregated gameplay stats.
	pub stats: Option<LeetifyStats>,

	/// Most recent games first.
	pub recent_games: Option<Vec<LeetifyRecentGame>>,
}

/// Ranks across matchmaking systems.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct LeetifyRanks
{
	/// Leetify rating.
	pub leetify: Option<f64>,
	pub premier: Option<u32>,
	pub faceit: Option<u32>,
	pub faceit_elo: Option<u32>,
	pub wingman: Option<u32>,
	pub renown: Option<u32>,

	/// Per-map competitive ranks.
	pub competitive: Option<Vec<CompetitiveRank>>,
}

/// A competitive rank on a specific map.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct CompetitiveRank
{
	pub map_name: Option<String>,
	pub rank: Option<u32>,
}

/// Leetify's skill ratings.
///
/// `aim`, `positioning`, and `utility` are on a 0-100 scale; `clutch` and
/// `opening` are fractions.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct LeetifyRating
{
	pub aim: Option<f64>,
	pub positioning: Option<f64>,
	pub utility: Option<f64>,
	pub clutch: Option<f64>,
	pub opening: Option<f64>,
	pub ct_leetify: Option<f64>,
	pub t_leetify: Option<f64>,
}

/// Aggregated gameplay stats.
///
/// Leetify sends many more of these; we only read what we display.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct LeetifyStats
{
	pub accuracy_enemy_spotted: Option<f64>,
	pub accuracy_head: Option<f64>,
	pub preaim: Option<f64>,
	pub reaction_time_ms: Option<f64>,
	pub spray_accuracy: Option<f64>,
	pub kd_ratio: Option<f64>,
	pub kills_per_round: Option<f64>,
}

/// A recently played game.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct LeetifyRecentGame
{
	pub game_id: Option<String>,
	pub map_name: Option<String>,

	/// `win`, `loss`, or `tie`.
	pub result: Option<String>,
}

/// A single entry from `GET /v3/profile/matches`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawMatch
{
	/// One entry per player in the match.
	pub stats: Option<Vec<RawMatchStat>>,
}

/// A single player's stats in a [`RawMatch`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct RawMatchStat
{
	pub steam64_id: Option<String>,
	pub total_kills: Option<u32>,
	pub total_deaths: Option<u32>,
	pub total_hs_kills: Option<u32>,
	pub dpr: Option<f64>,
	pub rounds_count: Option<u32>,
	pub total_damage: Option<u32>,
}

impl From<RawMatchStat> for banwatch::MatchStat
{
	fn from(raw: RawMatchStat) -> Self
	{
		Self {
			total_kills: raw.total_kills.unwrap_or_default(),
			total_deaths: raw.total_deaths.unwrap_or_default(),
			total_hs_kills: raw.total_hs_kills.unwrap_or_default(),
			dpr: raw.dpr.unwrap_or_default(),
			rounds_count: raw.rounds_count.unwrap_or_default(),
			total_damage: raw.total_damage.unwrap_or_default(),
		}
	}
}

/// Request payload for fetching a player's Leetify stats.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchStatsRequest
{
	/// The player's Steam64 ID.
	#[serde(default)]
	#[schema(value_type = Option<String>, example = "76561198282622073")]
	pub steam_id: Option<String>,
}

/// Response payload for fetching a player's Leetify stats.
#[derive(Debug, Serialize, utoipa::ToSchema, utoipa::IntoResponses)]
#[response(status = OK)]
pub struct FetchStatsResponse
{
	/// The player's stats, or `null` if Leetify doesn't know them.
	pub stats: Option<LeetifyDisplayStats>,

	/// Explains why `stats` is `null`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl IntoResponse for FetchStatsResponse
{
	fn into_response(self) -> Response
	{
		crate::http::extract::Json(self).into_response()
	}
}
