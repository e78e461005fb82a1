//! HTTP boundary.
//!
//! Exposes the care-coordination operations as JSON endpoints under
//! `/api/v1/`. The router is composable, `api_router()` returns a
//! `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
