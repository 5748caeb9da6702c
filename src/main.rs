use anyhow::Context;
use banwatch_api::runtime::{self, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("WARN: failed to load `.env` file: {error}");
	}

	let config = Config::parse();
	let _guard = banwatch_api::logging::init(&config).context("initialize logging")?;

	runtime::panic_hook::install();

	tracing::info!(?config, "starting up");

	banwatch_api::run(config).await
}
