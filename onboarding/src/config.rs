use std::env;
use std::str::FromStr;

use crate::app::{
    OnboardingPolicy, IMPORTANT_CLIENT_MULTIPLIER, MIN_AGE_YEARS, MIN_CREDIT_LIMIT,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum applicant age in full years
    pub min_age_years: i32,
    /// Lowest accepted credit limit for tiers that carry one
    pub min_credit_limit: i64,
    /// Factor applied to the scored limit of important clients
    pub important_client_multiplier: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_age_years: MIN_AGE_YEARS,
            min_credit_limit: MIN_CREDIT_LIMIT,
            important_client_multiplier: IMPORTANT_CLIENT_MULTIPLIER,
        }
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys keep their defaults
    ///
    /// Values that would switch a rule off are rejected: a negative minimum
    /// age, a credit threshold below 1 or a multiplier below 1.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            min_age_years: parse_at_least("ONBOARDING_MIN_AGE_YEARS", &lookup, MIN_AGE_YEARS, 0)?,
            min_credit_limit: parse_at_least(
                "ONBOARDING_MIN_CREDIT_LIMIT",
                &lookup,
                MIN_CREDIT_LIMIT,
                1,
            )?,
            important_client_multiplier: parse_at_least(
                "ONBOARDING_IMPORTANT_MULTIPLIER",
                &lookup,
                IMPORTANT_CLIENT_MULTIPLIER,
                1,
            )?,
        })
    }

    pub fn policy(&self) -> OnboardingPolicy {
        OnboardingPolicy {
            min_age_years: self.min_age_years,
            min_credit_limit: self.min_credit_limit,
            important_client_multiplier: self.important_client_multiplier,
        }
    }
}

fn parse_at_least<T, F>(key: &str, lookup: &F, default: T, min: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) if parsed >= min => Ok(parsed),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}
