//! Core types and algorithms for banwatch.
//!
//! Everything in here is pure: no network access, no global state. The API
//! crate feeds upstream responses into these types and serializes the results.

mod error;
pub use error::{Error, Result};

pub mod steam_id;
pub use steam_id::SteamID;

pub mod identifier;
pub use identifier::ProfileIdentifier;

pub mod stats;
pub use stats::{MatchStat, MatchStatsResult, MAX_MATCHES};

pub mod skill;
pub use skill::SkillTier;

pub mod friends;
pub use friends::{filter_and_sort, Friend, SortOrder};
