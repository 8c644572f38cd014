//! HTTP layer
//!
//! Axum server with:
//! - Method-constrained routes and static asset serving
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerError};
