//! In-memory adapter for UserStore

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::ports::UserStore;
use crate::error::DomainError;

/// Append-only store; saving the same user twice keeps both records
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved user, oldest first
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.users.write().await.push(user.clone());
        Ok(())
    }
}
