//! In-memory adapter for CreditScoringService
//!
//! Looks applicants up in a score table and falls back to a default limit.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::ports::CreditScoringService;
use crate::error::DomainError;

type ApplicantKey = (String, String, NaiveDate);

#[derive(Debug, Default)]
pub struct InMemoryCreditScoringService {
    limits: RwLock<HashMap<ApplicantKey, i64>>,
    default_limit: i64,
}

impl InMemoryCreditScoringService {
    /// Scoring service that gives unknown applicants `default_limit`
    pub fn new(default_limit: i64) -> Self {
        Self {
            limits: RwLock::default(),
            default_limit,
        }
    }

    /// Seed a limit for one applicant
    pub fn with_limit(
        mut self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
        limit: i64,
    ) -> Self {
        self.limits.get_mut().insert(
            (first_name.to_string(), surname.to_string(), date_of_birth),
            limit,
        );
        self
    }

    pub async fn set_limit(
        &self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
        limit: i64,
    ) {
        self.limits.write().await.insert(
            (first_name.to_string(), surname.to_string(), date_of_birth),
            limit,
        );
    }
}

#[async_trait]
impl CreditScoringService for InMemoryCreditScoringService {
    async fn credit_limit(
        &self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, DomainError> {
        let limits = self.limits.read().await;
        let key = (first_name.to_string(), surname.to_string(), date_of_birth);
        Ok(limits.get(&key).copied().unwrap_or(self.default_limit))
    }
}
