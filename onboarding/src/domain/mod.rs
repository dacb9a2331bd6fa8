//! Domain layer
//!
//! Contains pure business types with no external dependencies.
//! - `entities`: Clients and users
//! - `ports`: Trait definitions for the collaborators onboarding relies on

pub mod entities;
pub mod ports;
