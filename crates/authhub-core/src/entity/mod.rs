//! Domain entities.

pub mod session;
pub mod user;

pub use session::{Session, SessionId};
pub use user::User;
