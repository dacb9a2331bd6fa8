//! Onboarding policy
//!
//! Thresholds applied while onboarding a user, with their default values.

use crate::domain::entities::ClientTier;

/// Minimum elapsed age in years
pub const MIN_AGE_YEARS: i32 = 21;

/// Lowest credit limit accepted for tiers that carry one
pub const MIN_CREDIT_LIMIT: i64 = 500;

/// Factor applied to the scored limit of important clients
pub const IMPORTANT_CLIENT_MULTIPLIER: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingPolicy {
    pub min_age_years: i32,
    pub min_credit_limit: i64,
    pub important_client_multiplier: i64,
}

impl Default for OnboardingPolicy {
    fn default() -> Self {
        Self {
            min_age_years: MIN_AGE_YEARS,
            min_credit_limit: MIN_CREDIT_LIMIT,
            important_client_multiplier: IMPORTANT_CLIENT_MULTIPLIER,
        }
    }
}

impl OnboardingPolicy {
    /// Factor applied to the scored limit, `None` when the tier is not scored
    pub fn credit_multiplier(&self, tier: ClientTier) -> Option<i64> {
        if !tier.has_credit_limit() {
            return None;
        }
        match tier {
            ClientTier::Important => Some(self.important_client_multiplier),
            _ => Some(1),
        }
    }

    /// Whether a limit clears the threshold
    pub fn accepts_credit_limit(&self, credit_limit: i64) -> bool {
        credit_limit >= self.min_credit_limit
    }
}
