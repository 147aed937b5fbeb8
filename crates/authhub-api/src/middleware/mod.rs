//! Tower middleware for the AuthHub API.

pub mod auth;
pub mod logging;
