//! Wrappers around [`axum`]'s extractors, customizing error responses.

mod json;
pub use json::{Json, JsonRejection};
