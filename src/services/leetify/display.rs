//! Turning a raw Leetify profile into the numbers we actually show.

use banwatch::stats::round_to;
use banwatch::{MatchStatsResult, SkillTier};
use serde::Serialize;

use super::LeetifyProfileResponse;

/// How many recent games go into [`LeetifyDisplayStats::win_history`].
const WIN_HISTORY_LEN: usize = 10;

/// A player's Leetify stats, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeetifyDisplayStats
{
	/// Leetify rating, rounded to 2 decimals.
	pub rating: f64,

	/// Total amount of matches.
	pub matches: u64,

	/// FACEIT level.
	pub faceit: Option<u32>,

	/// FACEIT elo.
	#[serde(rename = "faceit_elo")]
	pub faceit_elo: Option<u32>,

	/// Premier rating.
	pub premier: Option<u32>,

	/// Competitive rank on the first listed map, or 0.
	pub competitive: u32,

	/// Kills per death over recent matches, rounded to 2 decimals.
	pub kd: f64,

	/// Preaim in degrees, rounded to 2 decimals.
	pub preaim: f64,

	/// Headshot percentage over recent matches.
	pub head_accuracy: i64,

	/// Win percentage.
	pub winrate: i64,

	/// Kills per round over recent matches, rounded to 2 decimals.
	pub kills_per_round: f64,

	/// Accuracy when the enemy is spotted, in percent.
	pub spotted_accuracy: i64,

	/// Average damage per round over recent matches.
	pub damage_per_round: i64,

	/// Reaction time, e.g. `"612ms"`.
	#[schema(example = "612ms")]
	pub time_to_damage: String,

	/// Spray accuracy, in percent.
	pub spray_accuracy: i64,

	/// Skill bars.
	pub skills: Vec<SkillData>,

	/// Outcomes of the most recent games, most recent first.
	pub win_history: Vec<GameOutcome>,

	/// The player's name on Leetify, or `"Unknown"`.
	pub nickname: String,

	/// When the player's first match was recorded, or an empty string.
	pub last_match_at: String,
}

/// A single skill bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct SkillData
{
	/// e.g. `"Aim"`.
	pub name: String,

	/// 0-100.
	pub value: i64,

	/// The bar's color.
	pub color: SkillTier,
}

impl SkillData
{
	/// Rounds `value` for display. The color is picked from the exact value.
	fn new(name: &str, value: f64) -> Self
	{
		Self { name: name.to_owned(), value: round(value), color: SkillTier::from_value(value) }
	}
}

/// The outcome of a game, as far as the win history is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub enum GameOutcome
{
	/// The game was won.
	#[serde(rename = "W")]
	Win,

	/// The game was lost or tied.
	#[serde(rename = "L")]
	Loss,
}

/// Combines a Leetify profile with stats derived from the player's recent
/// matches.
pub fn transform(profile: LeetifyProfileResponse, stats: &MatchStatsResult) -> LeetifyDisplayStats
{
	let ranks = profile.ranks.unwrap_or_default();
	let rating = profile.rating.unwrap_or_default();
	let leetify_stats = profile.stats.unwrap_or_default();

	let skills = vec![
		SkillData::new("Aim", rating.aim.unwrap_or_default()),
		SkillData::new("Utility", rating.utility.unwrap_or_default()),
		SkillData::new("Positioning", rating.positioning.unwrap_or_default()),
		SkillData::new("Opening Duels", rating.opening.unwrap_or_default() * 100.0),
		SkillData::new("Clutching", rating.clutch.unwrap_or_default() * 100.0),
	];

	let win_history = profile
		.recent_games
		.unwrap_or_default()
		.into_iter()
		.take(WIN_HISTORY_LEN)
		.map(|game| match game.result.as_deref() {
			Some("win") => GameOutcome::Win,
			_ => GameOutcome::Loss,
		})
		.collect();

	let competitive = ranks
		.competitive
		.as_deref()
		.and_then(<[_]>::first)
		.and_then(|rank| rank.rank)
		.unwrap_or_default();

	LeetifyDisplayStats {
		rating: round_to(ranks.leetify.unwrap_or_default(), 2),
		matches: profile.total_matches.unwrap_or_default(),
		faceit: ranks.faceit,
		faceit_elo: ranks.faceit_elo,
		premier: ranks.premier,
		competitive,
		kd: round_to(stats.kd, 2),
		preaim: round_to(leetify_stats.preaim.unwrap_or_default(), 2),
		head_accuracy: round(stats.hs_percentage),
		winrate: round(profile.winrate.unwrap_or_default() * 100.0),
		kills_per_round: round_to(stats.kills_per_round, 2),
		spotted_accuracy: round(leetify_stats.accuracy_enemy_spotted.unwrap_or_default()),
		damage_per_round: round(stats.avg_dpr),
		time_to_damage: format!("{}ms", round(leetify_stats.reaction_time_ms.unwrap_or_default())),
		spray_accuracy: round(leetify_stats.spray_accuracy.unwrap_or_default()),
		skills,
		win_history,
		nickname: profile.name.unwrap_or_else(|| String::from("Unknown")),
		last_match_at: profile.first_match_date.unwrap_or_default(),
	}
}

/// Rounds to the nearest integer.
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn round(value: f64) -> i64
{
	round_to(value, 0) as i64
}
