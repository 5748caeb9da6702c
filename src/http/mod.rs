//! HTTP plumbing shared by all services.
//!
//! Services return their own error types; handlers convert them into an
//! [`ErrorResponse`] via `?`, which takes care of picking a status code and
//! rendering the `{ "error": "…" }` body.

pub mod error;
pub use error::{ErrorKind, ErrorResponse, IntoErrorResponse};

pub mod extract;
