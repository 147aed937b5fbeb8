//! # authhub-api
//!
//! The HTTP binding for AuthHub. Translates requests into the framework-free
//! auth core and its results back into status codes: 401 when no credential
//! material is present, 403 when material fails to resolve to a user.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
