//! Searching and ordering friend lists.

use std::cmp::Reverse;

/// Anything that can be searched by name and ordered by ban age.
pub trait Friend
{
	/// The friend's display name.
	fn name(&self) -> &str;

	/// Days since the friend's most recent ban, if known.
	fn days_since_last_ban(&self) -> Option<u32>;
}

/// How to order a friend list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum SortOrder
{
	/// Most recent bans first.
	#[default]
	Newest,

	/// Oldest bans first.
	Oldest,
}

/// Keeps the friends whose name contains `search` (ignoring case) and sorts
/// them by [`Friend::days_since_last_ban()`].
///
/// A blank `search` keeps everyone. Otherwise it is matched as-is, surrounding
/// whitespace included. Unknown ban ages count as 0. The sort is stable.
pub fn filter_and_sort<F: Friend>(friends: Vec<F>, search: &str, order: SortOrder) -> Vec<F>
{
	let blank = search.trim().is_empty();
	let search = search.to_lowercase();

	let mut friends = friends
		.into_iter()
		.filter(|friend| blank || friend.name().to_lowercase().contains(&search))
		.collect::<Vec<_>>();

	let days = |friend: &F| friend.days_since_last_ban().unwrap_or_default();

	match order {
		SortOrder::Newest => friends.sort_by_key(days),
		SortOrder::Oldest => friends.sort_by_key(|friend| Reverse(days(friend))),
	}

	friends
}
