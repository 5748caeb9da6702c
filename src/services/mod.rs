//! API services.
//!
//! These contain the core business logic.
//!
//! If a service directly maps to an HTTP route, it will have an `http` module
//! containing the handlers and an `Into<axum::Router>` implementation.

pub mod steam;
pub use steam::SteamService;

pub mod leetify;
pub use leetify::LeetifyService;

pub mod friends;
pub use friends::FriendService;

pub mod health;
pub use health::HealthService;
