//! Applicant validation rules
//!
//! Pure checks run before any collaborator is contacted. Rules are applied in
//! a fixed order and the first failure is reported.

use chrono::{Datelike, NaiveDate};

use crate::app::policy::OnboardingPolicy;
use crate::error::{OnboardingError, EMAIL_INVALID, NAME_REQUIRED};

/// Both names must contain something other than whitespace
pub fn has_full_name(first_name: &str, surname: &str) -> bool {
    !first_name.trim().is_empty() && !surname.trim().is_empty()
}

/// Permissive check: an `@` and a `.` somewhere in the address
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Full years completed between `date_of_birth` and `today`
///
/// A Feb 29 birthday is not reached until Mar 1 in non-leap years.
pub fn elapsed_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Apply the name, email and age rules in that order
pub fn validate_applicant(
    first_name: &str,
    surname: &str,
    email: &str,
    date_of_birth: NaiveDate,
    today: NaiveDate,
    policy: &OnboardingPolicy,
) -> Result<(), OnboardingError> {
    if !has_full_name(first_name, surname) {
        return Err(OnboardingError::invalid_input(NAME_REQUIRED));
    }

    if !is_valid_email(email) {
        return Err(OnboardingError::invalid_input(EMAIL_INVALID));
    }

    if elapsed_years(date_of_birth, today) < policy.min_age_years {
        return Err(OnboardingError::under_age(policy.min_age_years));
    }

    Ok(())
}
