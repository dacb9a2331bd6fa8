//! Domain entities
//!
//! Pure domain models for clients and the users onboarded under them.

pub mod client;
pub mod user;

pub use client::{Client, ClientId, ClientStatus, ClientTier};
pub use user::{NewUser, User};
