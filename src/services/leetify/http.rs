//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::{FetchStatsRequest, FetchStatsResponse, LeetifyService};
use crate::http::extract::Json;
use crate::http::ErrorResponse;

impl From<LeetifyService> for Router
{
	fn from(svc: LeetifyService) -> Self
	{
		Router::new()
			.route("/leetify", routing::post(fetch_stats))
			.with_state(svc)
	}
}

/// Fetch a player's CS2 stats from Leetify.
///
/// Players Leetify doesn't know about are not an error; `stats` will be
/// `null` instead.
#[tracing::instrument(level = "trace", err(Debug, level = "debug"))]
#[utoipa::path(
  post,
  path = "/api/leetify",
  tag = "Leetify",
  request_body = FetchStatsRequest,
  responses(FetchStatsResponse, ErrorResponse),
)]
async fn fetch_stats(
	State(svc): State<LeetifyService>,
	Json(req): Json<FetchStatsRequest>,
) -> Result<FetchStatsResponse, ErrorResponse>
{
	let res = svc.fetch_stats(req).await?;

	Ok(res)
}

#[cfg(test)]
mod tests
{
	use axum::Router;
	use serde_json::json;
	use tower::ServiceExt;

	use crate::testing::{self, FakeUpstream};

	#[tokio::test]
	async fn missing_steam_id() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.leetify_svc());

		let res = router
			.oneshot(testing::post_json("/leetify", json!({}))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Steam ID is required" }));

		Ok(())
	}

	#[tokio::test]
	async fn invalid_steam_id() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.leetify_svc());

		let res = router
			.oneshot(testing::post_json("/leetify", json!({ "steamId": "1234" }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Invalid Steam64 ID. Must be a 17-digit number" }));

		Ok(())
	}

	#[tokio::test]
	async fn not_on_leetify() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.leetify_svc());

		let res = router
			.oneshot(testing::post_json("/leetify", json!({ "steamId": testing::PRIVATE_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::OK);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "stats": null, "message": "Profile not found on Leetify" }));

		Ok(())
	}

	#[tokio::test]
	async fn upstream_failure_is_500() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.leetify_svc());

		let res = router
			.oneshot(testing::post_json("/leetify", json!({ "steamId": testing::LEETIFY_ERROR_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Leetify API error: 500" }));

		Ok(())
	}

	#[tokio::test]
	async fn stats_are_camel_case() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.leetify_svc());

		let res = router
			.oneshot(testing::post_json("/leetify", json!({ "steamId": testing::USER_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::OK);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;
		let stats = body.get("stats");

		testing::assert!(body.get("message").is_none());
		testing::assert_eq!(stats.and_then(|s| s.get("winHistory")), Some(&json!(["W", "L", "L", "W"])));
		testing::assert_eq!(stats.and_then(|s| s.get("headAccuracy")), Some(&json!(50)));
		testing::assert_eq!(stats.and_then(|s| s.get("faceit_elo")), Some(&json!(1780)));
		testing::assert_eq!(
			stats
				.and_then(|s| s.get("skills"))
				.and_then(|skills| skills.get(0)),
			Some(&json!({ "name": "Aim", "value": 73, "color": "bg-emerald-500" }))
		);

		Ok(())
	}
}
