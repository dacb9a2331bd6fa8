//! Client domain entity
//!
//! A client record owned by the client directory. The onboarding flow only
//! reads it; the client's name doubles as its credit tier.

use serde::{Deserialize, Serialize};

/// Unique identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub i64);

impl From<i64> for ClientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account status of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Active => write!(f, "active"),
            ClientStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            _ => Err(format!("Unknown client status: {}", s)),
        }
    }
}

/// Credit tier of a client, decided by its name
///
/// Matching is exact and case-sensitive; any name other than the two
/// recognised ones is a normal client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientTier {
    VeryImportant,
    Important,
    Normal,
}

impl ClientTier {
    pub const VERY_IMPORTANT_NAME: &'static str = "VeryImportantClient";
    pub const IMPORTANT_NAME: &'static str = "ImportantClient";

    /// Get tier from a client name
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::VERY_IMPORTANT_NAME => ClientTier::VeryImportant,
            Self::IMPORTANT_NAME => ClientTier::Important,
            _ => ClientTier::Normal,
        }
    }

    /// Whether users of this tier carry a checked credit limit
    pub fn has_credit_limit(self) -> bool {
        !matches!(self, ClientTier::VeryImportant)
    }
}

impl std::fmt::Display for ClientTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientTier::VeryImportant => write!(f, "{}", Self::VERY_IMPORTANT_NAME),
            ClientTier::Important => write!(f, "{}", Self::IMPORTANT_NAME),
            ClientTier::Normal => write!(f, "NormalClient"),
        }
    }
}

/// A client that users are onboarded under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub status: ClientStatus,
}

impl Client {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ClientId(id),
            name: name.into(),
            status: ClientStatus::default(),
        }
    }

    pub fn tier(&self) -> ClientTier {
        ClientTier::from_name(&self.name)
    }
}
