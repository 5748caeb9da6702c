//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types, routes, and other metadata that will be included in the
//! spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use derive_more::{Deref, DerefMut};
use itertools::Itertools;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Routes that are served under both `/api` and `/api/v2`.
const VERSIONED_ROUTES: &[&str] = &["/steam", "/leetify"];

#[derive(Debug, Clone, Deref, DerefMut, OpenApi)]
#[openapi(
  info(
    title = "banwatch",
    description = "Checks a Steam profile's friends for VAC and game bans.",
  ),
  paths(
    crate::services::health::http::get,
    crate::services::health::http::hello,
    crate::services::friends::http::lookup,
    crate::services::leetify::http::fetch_stats,
  ),
  components(
    schemas(
      banwatch::SteamID,
      banwatch::SortOrder,
      banwatch::SkillTier,

      crate::http::ErrorResponse,

      crate::services::health::HelloResponse,

      crate::services::steam::SteamPlayer,
      crate::services::steam::VACBanInfo,

      crate::services::friends::LookupFriendsRequest,
      crate::services::friends::LookupFriendsResponse,
      crate::services::friends::FriendProfile,

      crate::services::leetify::FetchStatsRequest,
      crate::services::leetify::FetchStatsResponse,
      crate::services::leetify::LeetifyDisplayStats,
      crate::services::leetify::SkillData,
      crate::services::leetify::GameOutcome,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec
{
	/// Creates a new [`Spec`].
	pub fn new() -> Self
	{
		let mut spec = Self(Self::openapi());
		spec.mirror_versioned_routes();
		spec
	}

	/// Returns an iterator over the registered API routes and their allowed
	/// HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)>
	{
		self.paths.paths.iter().map(|(path, handler)| {
			let methods = handler
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Creates a [`SwaggerUi`], which can be turned into an [`axum::Router`],
	/// that will serve a SwaggerUI web page and a JSON file representing this
	/// OpenAPI spec.
	pub fn swagger_ui(self) -> SwaggerUi
	{
		SwaggerUi::new("/docs/swagger-ui").url("/docs/openapi.json", self.0)
	}

	/// Copies every `/api/…` route in [`VERSIONED_ROUTES`] to `/api/v2/…`.
	///
	/// Both are served by the same handler, so the docs only list them once.
	fn mirror_versioned_routes(&mut self)
	{
		for route in VERSIONED_ROUTES {
			let Some(mut item) = self.paths.paths.get(&format!("/api{route}")).cloned() else {
				continue;
			};

			for operation in item.operations.values_mut() {
				operation.operation_id = operation.operation_id.take().map(|id| format!("{id}_v2"));
			}

			self.paths.paths.insert(format!("/api/v2{route}"), item);
		}
	}
}
