//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::{FriendService, LookupFriendsRequest, LookupFriendsResponse};
use crate::http::extract::Json;
use crate::http::ErrorResponse;

impl From<FriendService> for Router
{
	fn from(svc: FriendService) -> Self
	{
		Router::new()
			.route("/steam", routing::post(lookup))
			.with_state(svc)
	}
}

/// Check a Steam user's friends for VAC and game bans.
///
/// `profileUrl` may be a full profile URL, a vanity name, or a Steam64 ID.
#[tracing::instrument(level = "trace", err(Debug, level = "debug"))]
#[utoipa::path(
  post,
  path = "/api/steam",
  tag = "Steam",
  request_body = LookupFriendsRequest,
  responses(LookupFriendsResponse, ErrorResponse),
)]
async fn lookup(
	State(svc): State<FriendService>,
	Json(req): Json<LookupFriendsRequest>,
) -> Result<LookupFriendsResponse, ErrorResponse>
{
	let res = svc.lookup(req).await?;

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
	async fn lookup_works() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let res = router
			.oneshot(testing::post_json("/steam", json!({ "profileUrl": testing::USER_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::OK);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(
			body.get("message"),
			Some(&json!("Found 30 friend(s) with VAC/Game bans"))
		);
		testing::assert_eq!(body.get("totalFriends"), Some(&json!(150)));
		testing::assert_eq!(
			body.get("bannedFriends")
				.and_then(serde_json::Value::as_array)
				.map(Vec::len),
			Some(30)
		);
		testing::assert_eq!(
			body.pointer("/userProfile/personaname"),
			Some(&json!("AlphaKeks"))
		);
		testing::assert_eq!(
			body.pointer("/bannedFriends/0/VACBanned"),
			Some(&json!(true))
		);

		Ok(())
	}

	#[tokio::test]
	async fn missing_profile_url() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let res = router
			.oneshot(testing::post_json("/steam", json!({}))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Profile URL is required" }));

		Ok(())
	}

	#[tokio::test]
	async fn invalid_profile_url() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let res = router
			.oneshot(testing::post_json("/steam", json!({ "profileUrl": "https://example.com/?" }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Invalid Steam profile URL" }));

		Ok(())
	}

	#[tokio::test]
	async fn vanity_lookup_failure_is_invalid_url() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let res = router
			.oneshot(testing::post_json(
				"/steam",
				json!({ "profileUrl": format!("https://steamcommunity.com/id/{}/", testing::FORBIDDEN_VANITY) }),
			)?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({ "error": "Invalid Steam profile URL" }));
		testing::assert_eq!(testing::hits(&upstream.hits.vanity), 1);

		Ok(())
	}

	#[tokio::test]
	async fn unreadable_friend_list_is_not_an_error() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let res = router
			.oneshot(testing::post_json("/steam", json!({ "profileUrl": testing::HTML_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::OK);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body.get("totalFriends"), Some(&json!(0)));

		Ok(())
	}

	#[tokio::test]
	async fn placeholder_api_key() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("your_steam_api_key_here")));

		let res = router
			.oneshot(testing::post_json("/steam", json!({ "profileUrl": testing::USER_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({
			"error": "Please replace the placeholder STEAM_API_KEY in your .env file with your \
			          actual Steam API key from: https://steamcommunity.com/dev/apikey"
		}));

		Ok(())
	}

	#[tokio::test]
	async fn missing_api_key() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(None));

		let res = router
			.oneshot(testing::post_json("/steam", json!({ "profileUrl": testing::USER_ID }))?)
			.await?;

		testing::assert_eq!(res.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::parse_body::<serde_json::Value>(res.into_body()).await?;

		testing::assert_eq!(body, json!({
			"error": "Steam API key not configured. Please add STEAM_API_KEY to your .env file. \
			          Get your key from: https://steamcommunity.com/dev/apikey"
		}));

		Ok(())
	}

	#[tokio::test]
	async fn malformed_body() -> color_eyre::Result<()>
	{
		let upstream = FakeUpstream::spawn().await?;
		let router = Router::from(upstream.friend_svc(Some("test-key")));

		let req = axum::extract::Request::builder()
			.method(http::Method::POST)
			.uri("/steam")
			.body(axum::body::Body::from("{ not json"))?;

		let res = router.oneshot(req).await?;

		testing::assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

		Ok(())
	}
}
