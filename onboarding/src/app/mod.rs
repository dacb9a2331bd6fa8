//! Application layer
//!
//! Contains the onboarding use case and the rules it applies.

pub mod policy;
pub mod user_service;
pub mod validation;

pub use policy::{OnboardingPolicy, IMPORTANT_CLIENT_MULTIPLIER, MIN_AGE_YEARS, MIN_CREDIT_LIMIT};
pub use user_service::UserService;
pub use validation::{elapsed_years, has_full_name, is_valid_email, validate_applicant};
