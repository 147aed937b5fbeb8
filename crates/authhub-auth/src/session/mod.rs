//! Session lifecycle: creation, lookup, destruction.

pub mod store;

pub use store::SessionStore;
