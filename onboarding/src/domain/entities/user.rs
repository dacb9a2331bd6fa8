//! User domain entity
//!
//! A user onboarded under a client. Built by `UserService`; the credit fields
//! are settled before the user is handed to the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::client::{Client, ClientTier};

/// An onboarded user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    /// Copy of the client record resolved at onboarding time
    pub client: Client,
    pub has_credit_limit: bool,
    /// Zero when `has_credit_limit` is false
    pub credit_limit: i64,
}

impl User {
    /// Tier of the client this user belongs to
    pub fn tier(&self) -> ClientTier {
        self.client.tier()
    }
}

/// Applicant data needed to onboard a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
}

impl NewUser {
    /// Attach the resolved client and the credit decision
    pub fn into_user(self, client: Client, credit_limit: Option<i64>) -> User {
        User {
            first_name: self.first_name,
            surname: self.surname,
            email_address: self.email_address,
            date_of_birth: self.date_of_birth,
            client,
            has_credit_limit: credit_limit.is_some(),
            credit_limit: credit_limit.unwrap_or_default(),
        }
    }
}
