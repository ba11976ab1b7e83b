//! HTTP API for geodash.
//!
//! Keeps provider credentials server-side: browsers call the JSON routes in
//! [`api`] and never talk to a provider directly.

pub use api::{Gateway, router};
pub use serve::{ServeHandle, serve};

pub mod api;
mod serve;
