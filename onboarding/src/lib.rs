//! User onboarding service
//!
//! Validates an applicant, resolves their client, settles a tier-dependent
//! credit limit and persists the resulting user.
//! Uses hexagonal (ports & adapters) architecture: the service depends only on
//! the traits in `domain::ports`, and `adapters` provides implementations.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::{
    InMemoryClientDirectory, InMemoryCreditScoringService, InMemoryUserStore, SystemClock,
};
pub use app::{OnboardingPolicy, UserService};
pub use config::Config;
pub use domain::entities::{Client, ClientId, ClientStatus, ClientTier, NewUser, User};
pub use error::{ConfigError, DomainError, ErrorKind, OnboardingError};
