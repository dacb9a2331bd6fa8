//! Credit scoring port
//!
//! Abstracts the external service that assigns a credit limit to an applicant.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DomainError;

#[async_trait]
pub trait CreditScoringService: Send + Sync {
    /// Score an applicant and return their raw credit limit
    async fn credit_limit(
        &self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, DomainError>;
}
