//! # authhub-directory
//!
//! The user-lookup collaborator consumed by the auth core. Defines the
//! [`UserDirectory`] trait and an in-memory implementation suitable for
//! single-node deployments and tests.

pub mod directory;
pub mod memory;

pub use directory::UserDirectory;
pub use memory::MemoryUserDirectory;
