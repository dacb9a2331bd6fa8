//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod credit;
pub mod repositories;

pub use clock::Clock;
pub use credit::CreditScoringService;
pub use repositories::{ClientDirectory, UserStore};
