//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the command line and the environment on startup.
//!
//! See the `.env.example` file in the root of the repository for all the
//! relevant variables and example values.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// The API's runtime configuration.
#[derive(Clone, clap::Parser)]
#[command(version, about)]
pub struct Config
{
	/// The address to listen on.
	#[arg(long, env = "BANWATCH_ADDR", default_value = "127.0.0.1:3000")]
	pub addr: SocketAddr,

	/// Steam Web API key.
	///
	/// Get one from <https://steamcommunity.com/dev/apikey>. Without it, every
	/// friend lookup fails with a 500.
	#[arg(long, env = "STEAM_API_KEY")]
	pub steam_api_key: Option<String>,

	/// Base URL of Steam's Web API.
	#[arg(long, env = "STEAM_API_URL", default_value = "https://api.steampowered.com")]
	pub steam_api_url: Url,

	/// Leetify API key.
	///
	/// Requests are sent unauthenticated if this is not set.
	#[arg(long, env = "LEETIFY_API_KEY")]
	pub leetify_api_key: Option<String>,

	/// Base URL of Leetify's public API.
	#[arg(long, env = "LEETIFY_API_URL", default_value = "https://api-public.cs-prod.leetify.com")]
	pub leetify_api_url: Url,

	/// How long Steam responses are cached, in seconds.
	#[arg(long, env = "BANWATCH_STEAM_CACHE_TTL", default_value_t = 3600)]
	pub steam_cache_ttl: u64,

	/// How long Leetify responses are cached, in seconds.
	#[arg(long, env = "BANWATCH_LEETIFY_CACHE_TTL", default_value_t = 1800)]
	pub leetify_cache_ttl: u64,

	/// The maximum amount of entries per cache.
	#[arg(long, env = "BANWATCH_CACHE_CAPACITY", default_value_t = 10_000)]
	pub cache_capacity: u64,

	/// Directory for daily-rotated log files.
	///
	/// Logs only go to stderr if this is not set.
	#[arg(long, env = "BANWATCH_LOG_DIR")]
	pub log_dir: Option<PathBuf>,

	/// Log filter directives.
	#[arg(long, env = "RUST_LOG", default_value = "banwatch_api=info,warn")]
	pub log_filter: String,
}

impl Config
{
	/// [`Config::steam_cache_ttl`] as a [`Duration`].
	pub const fn steam_cache_ttl(&self) -> Duration
	{
		Duration::from_secs(self.steam_cache_ttl)
	}

	/// [`Config::leetify_cache_ttl`] as a [`Duration`].
	pub const fn leetify_cache_ttl(&self) -> Duration
	{
		Duration::from_secs(self.leetify_cache_ttl)
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		/// Renders `Some(_)` without the secret.
		fn redacted(key: Option<&String>) -> Option<&'static str>
		{
			key.map(|_| "*****")
		}

		f.debug_struct("Config")
			.field("addr", &self.addr)
			.field("steam_api_key", &redacted(self.steam_api_key.as_ref()))
			.field("steam_api_url", &format_args!("{:?}", self.steam_api_url.as_str()))
			.field("leetify_api_key", &redacted(self.leetify_api_key.as_ref()))
			.field("leetify_api_url", &format_args!("{:?}", self.leetify_api_url.as_str()))
			.field("steam_cache_ttl", &self.steam_cache_ttl())
			.field("leetify_cache_ttl", &self.leetify_cache_ttl())
			.field("cache_capacity", &self.cache_capacity)
			.field("log_dir", &self.log_dir)
			.field("log_filter", &self.log_filter)
			.finish()
	}
}
