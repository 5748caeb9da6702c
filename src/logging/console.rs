//! Tracing layer for [tokio-console].
//!
//! [tokio-console]: https://github.com/tokio-rs/console

use console_subscriber::ConsoleLayer;
use tracing_subscriber::registry::LookupSpan;

/// Creates a tracing layer that will send telemetry to [tokio-console].
///
/// The server address is taken from the `TOKIO_CONSOLE_BIND` environment
/// variable, falling back to `127.0.0.1:6669`.
///
/// [tokio-console]: https://github.com/tokio-rs/console
pub fn layer<S>() -> impl tracing_subscriber::Layer<S>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	ConsoleLayer::builder().with_default_env().spawn()
}
