//! Port doubles for `UserService` tests
//!
//! Each double remembers what it was asked, so a test can check that a
//! rejected applicant never reached the directory, scorer or store. The
//! `failing()` constructors make the port return an error instead.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Client, ClientId, User};
use crate::domain::ports::{ClientDirectory, Clock, CreditScoringService, UserStore};
use crate::error::DomainError;

/// Serves seeded clients and logs every id looked up
#[derive(Default)]
pub struct MockClientDirectory {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
    pub lookups: Arc<RwLock<Vec<ClientId>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let directory = Self::default();
        *directory.should_fail.write().unwrap() = true;
        directory
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        self.clients.write().unwrap().insert(client.id, client);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.read().unwrap().len()
    }
}

#[async_trait]
impl ClientDirectory for MockClientDirectory {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        self.lookups.write().unwrap().push(id);

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Unavailable("Mock failure".to_string()));
        }

        Ok(self.clients.read().unwrap().get(&id).cloned())
    }
}

/// Arguments of one scoring call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringCall {
    pub first_name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
}

/// Returns one fixed limit to every applicant
#[derive(Default)]
pub struct MockCreditScoringService {
    limit: i64,
    pub calls: Arc<RwLock<Vec<ScoringCall>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockCreditScoringService {
    /// Scoring service that returns the same limit for everyone
    pub fn returning(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let service = Self::default();
        *service.should_fail.write().unwrap() = true;
        service
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl CreditScoringService for MockCreditScoringService {
    async fn credit_limit(
        &self,
        first_name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, DomainError> {
        self.calls.write().unwrap().push(ScoringCall {
            first_name: first_name.to_string(),
            surname: surname.to_string(),
            date_of_birth,
        });

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Unavailable("Mock failure".to_string()));
        }

        Ok(self.limit)
    }
}

/// Keeps saved users in order
#[derive(Default)]
pub struct MockUserStore {
    pub saved: Arc<RwLock<Vec<User>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        *store.should_fail.write().unwrap() = true;
        store
    }

    pub fn save_count(&self) -> usize {
        self.saved.read().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        self.saved.write().unwrap().push(user.clone());
        Ok(())
    }
}

/// Clock pinned to one date
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
