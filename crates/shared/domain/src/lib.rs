//! Domain layer - Core entities and value objects for the user directory.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The gateway and the directory service both build on these types.

pub mod auth;
pub mod constants;
pub mod error;
pub mod user;

pub use auth::AuthContext;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserSummary};
