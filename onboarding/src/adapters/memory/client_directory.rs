//! In-memory adapter for ClientDirectory

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Client, ClientId};
use crate::domain::ports::ClientDirectory;
use crate::error::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the directory with a client
    pub fn with_client(mut self, client: Client) -> Self {
        self.clients.get_mut().insert(client.id, client);
        self
    }

    /// Add or replace a client, returning the previous record
    pub async fn insert(&self, client: Client) -> Option<Client> {
        self.clients.write().await.insert(client.id, client)
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.read().await.get(&id).cloned())
    }
}
