//! # authhub-core
//!
//! Core crate for AuthHub. Contains configuration schemas, domain entities,
//! the PII log-redaction helper, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AuthHub crates.

pub mod config;
pub mod entity;
pub mod error;
pub mod redact;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
