//! Error types for the onboarding service
//!
//! This module defines error types for each layer:
//! - `DomainError`: Failures reported by collaborator ports
//! - `OnboardingError`: Classified outcomes of the onboarding use case
//! - `ConfigError`: Invalid environment configuration

use thiserror::Error;

/// Message for a missing first name or surname
pub const NAME_REQUIRED: &str = "user firstname / surname is required ";

/// Message for an email without `@` or `.`
pub const EMAIL_INVALID: &str = "user email is invalid ";

/// Message for an applicant below the default minimum age
pub const AGE_TOO_LOW: &str = "user should be older than 21 years";

/// Message for an unknown client id
pub const CLIENT_NOT_FOUND: &str = "Client with this Id does not exist.";

/// Message for a credit limit below the threshold
pub const INSUFFICIENT_CREDIT: &str = "insufficient credit limit";

/// Port layer errors - raised by client directories, scoring services and stores
///
/// An unknown id is not an error here: directories answer `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Onboarding errors - what `UserService::add_user` returns
///
/// The first three variants display their message verbatim so callers can
/// compare against the constants above.
#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InsufficientCredit(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(DomainError),

    #[error("Dependency failure: {0}")]
    Dependency(#[from] DomainError),
}

/// Fieldless category of an [`OnboardingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    InsufficientCredit,
    PersistenceFailure,
    Dependency,
}

impl OnboardingError {
    pub fn invalid_input(message: &str) -> Self {
        OnboardingError::InvalidInput(message.to_string())
    }

    /// Rejection for an applicant younger than `min_age_years`
    pub fn under_age(min_age_years: i32) -> Self {
        OnboardingError::InvalidInput(format!("user should be older than {} years", min_age_years))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OnboardingError::InvalidInput(_) => ErrorKind::InvalidInput,
            OnboardingError::NotFound(_) => ErrorKind::NotFound,
            OnboardingError::InsufficientCredit(_) => ErrorKind::InsufficientCredit,
            OnboardingError::PersistenceFailure(_) => ErrorKind::PersistenceFailure,
            OnboardingError::Dependency(_) => ErrorKind::Dependency,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}
