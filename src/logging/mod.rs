//! Log capturing facilities.
//!
//! Logs always go to stderr. If [`Config::log_dir`] is set, they are also
//! written to daily-rotated files in that directory.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::runtime::Config;

mod stderr;
mod files;

#[cfg(feature = "console")]
mod console;

/// Flushes buffered log files when dropped.
#[derive(Debug)]
#[must_use = "log files stop receiving writes once the guard is dropped"]
pub struct Guard
{
	/// The guard returned by [`tracing-appender`]'s logging thread.
	#[allow(dead_code)]
	appender_guard: Option<WorkerGuard>,
}

/// Initializes [`tracing-subscriber`].
///
/// NOTE: the returned [`Guard`] has to stay alive until the program exits!
pub fn init(config: &Config) -> anyhow::Result<Guard>
{
	let filter = EnvFilter::try_new(&config.log_filter).context("parse log filter")?;

	let (files, appender_guard) = match config.log_dir.as_deref() {
		None => (None, None),
		Some(log_dir) => {
			let (layer, guard) = files::layer(log_dir).context("initialize file logging")?;
			(Some(layer), Some(guard))
		}
	};

	let layer = Layer::and_then(stderr::layer(), files);
	let registry = tracing_subscriber::registry().with(layer.with_filter(filter));

	#[cfg(feature = "console")]
	let registry = registry.with(console::layer());

	registry.try_init().context("install global subscriber")?;

	tracing::info!(log_dir = ?config.log_dir, "initialized logging");

	Ok(Guard { appender_guard })
}
