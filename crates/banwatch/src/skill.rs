//! Color tiers for 0-100 skill values.

use std::fmt;

/// The display tier of a skill value.
///
/// Serialized as the CSS class the frontend uses for the tier's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum SkillTier
{
	/// Below 30.
	#[cfg_attr(feature = "serde", serde(rename = "bg-red-500"))]
	Red,

	/// 30 to 49.
	#[cfg_attr(feature = "serde", serde(rename = "bg-orange-500"))]
	Orange,

	/// 50 to 69.
	#[cfg_attr(feature = "serde", serde(rename = "bg-yellow-500"))]
	Yellow,

	/// 70 and above.
	#[cfg_attr(feature = "serde", serde(rename = "bg-emerald-500"))]
	Emerald,
}

impl SkillTier
{
	/// Picks the tier for `value`.
	pub fn from_value(value: f64) -> Self
	{
		match value {
			v if v >= 70.0 => Self::Emerald,
			v if v >= 50.0 => Self::Yellow,
			v if v >= 30.0 => Self::Orange,
			_ => Self::Red,
		}
	}

	/// The CSS class for this tier.
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::Red => "bg-red-500",
			Self::Orange => "bg-orange-500",
			Self::Yellow => "bg-yellow-500",
			Self::Emerald => "bg-emerald-500",
		}
	}
}

impl fmt::Display for SkillTier
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}
