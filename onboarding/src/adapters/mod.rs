//! Adapters layer
//!
//! Implementations of port traits.

pub mod clock;
pub mod memory;

pub use clock::SystemClock;
pub use memory::{InMemoryClientDirectory, InMemoryCreditScoringService, InMemoryUserStore};
