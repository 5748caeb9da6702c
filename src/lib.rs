#![doc = include_str!("../README.md")]
// TODO: remove once https://github.com/tokio-rs/tracing/issues/2912 lands
#![allow(clippy::blocks_in_conditions)]

use std::fmt::Write;
use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::extract::ConnectInfo;
use axum::Router;
use tokio::net::TcpListener;

pub mod runtime;
pub use runtime::Config;

pub mod logging;
pub mod http;
pub mod middleware;
pub mod cache;
pub mod services;
pub mod openapi;

#[cfg(test)]
mod testing;

use services::{FriendService, HealthService, LeetifyService, SteamService};

#[allow(clippy::missing_docs_in_private_items)]
type Server = axum::serve::Serve<
	IntoMakeServiceWithConnectInfo<Router, SocketAddr>,
	axum::middleware::AddExtension<Router, ConnectInfo<SocketAddr>>,
>;

/// Run the API.
///
/// This function will not exit until a SIGINT signal is received.
/// If you want to supply a custom signal for graceful shutdown, use
/// [`run_until()`] instead.
pub async fn run(config: Config) -> anyhow::Result<()>
{
	server(&config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(runtime::signals::sigint())
		.await
		.context("run http server")
}

/// Run the API until a given future completes.
///
/// This function is the same as [`run()`], except that it also waits for the
/// provided `until` future, and shuts down the server when that future
/// resolves.
pub async fn run_until<Until>(config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	server(&config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(async move {
			tokio::select! {
				() = until => {}
				() = runtime::signals::sigint() => {}
			}
		})
		.await
		.context("run http server")
}

/// Builds the API's [`Router`], including all services and middleware.
///
/// JSON routes are served under both `/api` and `/api/v2`.
pub fn router(config: &Config) -> anyhow::Result<Router>
{
	let http_client = reqwest::Client::builder()
		.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
		.build()
		.context("build http client")?;

	let steam_svc = SteamService::new(
		&config.steam_api_url,
		config.steam_api_key.clone(),
		http_client.clone(),
		config.steam_cache_ttl(),
		config.cache_capacity,
	);

	let leetify_svc = LeetifyService::new(
		&config.leetify_api_url,
		config.leetify_api_key.clone(),
		http_client,
		config.leetify_cache_ttl(),
		config.cache_capacity,
	);

	let friend_svc = FriendService::new(steam_svc);
	let health_svc = HealthService::new();

	let api = Router::new()
		.merge(Router::from(friend_svc))
		.merge(Router::from(leetify_svc));

	let router = Router::new()
		.merge(Router::from(health_svc))
		.nest("/api", api.clone())
		.nest("/api/v2", api)
		.layer(middleware::cors::permissive())
		.layer(middleware::panic_handler::layer())
		.layer(middleware::logging::layer())
		.merge(openapi::Spec::new().swagger_ui());

	Ok(router)
}

/// Runs the necessary setup for the API and returns a future that will run the
/// server when polled.
///
/// See [`run()`] and [`run_until()`].
async fn server(config: &Config) -> anyhow::Result<Server>
{
	let router = router(config)?;

	tracing::debug!(addr = %config.addr, "binding TCP listener");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.context("bind tcp socket")?;

	let addr = tcp_listener.local_addr().context("get tcp addr")?;
	let spec = openapi::Spec::new();
	let mut routes_message = String::from("registering routes:\n");

	for (path, methods) in spec.routes() {
		writeln!(&mut routes_message, "    • {path} => [{methods}]")?;
	}

	tracing::info!("{routes_message}");
	tracing::info!(%addr, "listening for requests");
	tracing::info!("hosting SwaggerUI: <http://{addr}/docs/swagger-ui>");

	Ok(axum::serve(tcp_listener, router.into_make_service_with_connect_info::<SocketAddr>()))
}
