//! Repository port traits
//!
//! These traits define the interface for client lookup and user persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{Client, ClientId, User};
use crate::error::DomainError;

/// Directory of known clients
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Find a client by ID, `None` if the id is unknown
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError>;
}

/// Durable store for onboarded users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Record a finalized user
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
