//! In-memory adapters
//!
//! Process-local implementations of the collaborator ports. Each one guards
//! its state with a `tokio::sync::RwLock`, so they are safe to share behind
//! an `Arc` across concurrent onboarding calls.

pub mod client_directory;
pub mod credit_scoring;
pub mod user_store;

pub use client_directory::InMemoryClientDirectory;
pub use credit_scoring::InMemoryCreditScoringService;
pub use user_store::InMemoryUserStore;
