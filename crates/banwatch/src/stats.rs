//! Aggregate performance statistics over a player's recent matches.

/// The maximum amount of matches that go into [`MatchStatsResult::calculate()`].
pub const MAX_MATCHES: usize = 30;

/// A single player's numbers from a single match.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MatchStat
{
	/// Kills in this match.
	pub total_kills: u32,

	/// Deaths in this match.
	pub total_deaths: u32,

	/// Kills that were headshots.
	pub total_hs_kills: u32,

	/// Damage per round, as reported upstream.
	pub dpr: f64,

	/// Rounds played.
	pub rounds_count: u32,

	/// Total damage dealt.
	pub total_damage: u32,
}

/// Ratios derived from a list of [`MatchStat`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MatchStatsResult
{
	/// Kills per death.
	pub kd: f64,

	/// Percentage (0-100) of kills that were headshots.
	pub hs_percentage: f64,

	/// Average damage per round.
	pub avg_dpr: f64,

	/// Average kills per round.
	pub kills_per_round: f64,
}

/// Running sums over all matches.
#[derive(Debug, Default, Clone, Copy)]
struct Totals
{
	kills: u64,
	deaths: u64,
	hs_kills: u64,
	damage: u64,
	rounds: u64,
}

impl MatchStatsResult
{
	/// Sums up `matches` and derives ratios from the totals.
	///
	/// Only the first [`MAX_MATCHES`] entries are considered. Divisions by zero
	/// are avoided as follows:
	///
	/// - no deaths: `kd` is the kill count, or `1.0` if there were no kills
	///   either
	/// - no kills: `hs_percentage` is 0
	/// - no rounds: `avg_dpr` and `kills_per_round` are 0
	///
	/// An empty slice yields all zeroes.
	#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
	pub fn calculate(matches: &[MatchStat]) -> Self
	{
		if matches.is_empty() {
			return Self::default();
		}

		let totals = matches
			.iter()
			.take(MAX_MATCHES)
			.fold(Totals::default(), |acc, m| Totals {
				kills: acc.kills + u64::from(m.total_kills),
				deaths: acc.deaths + u64::from(m.total_deaths),
				hs_kills: acc.hs_kills + u64::from(m.total_hs_kills),
				damage: acc.damage + u64::from(m.total_damage),
				rounds: acc.rounds + u64::from(m.rounds_count),
			});

		let kills = totals.kills as f64;
		let rounds = totals.rounds as f64;

		let kd = match totals.deaths {
			0 if totals.kills > 0 => kills,
			0 => 1.0,
			deaths => kills / deaths as f64,
		};

		let hs_percentage = match totals.kills {
			0 => 0.0,
			_ => totals.hs_kills as f64 / kills * 100.0,
		};

		let (avg_dpr, kills_per_round) = match totals.rounds {
			0 => (0.0, 0.0),
			_ => (totals.damage as f64 / rounds, kills / rounds),
		};

		Self { kd, hs_percentage, avg_dpr, kills_per_round }
	}
}

/// Rounds `value` to `decimals` decimal places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64
{
	let factor = 10_f64.powi(decimals);

	(value * factor).round() / factor
}
