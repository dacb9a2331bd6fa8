//! Clock port
//!
//! Source of the current calendar date, used for age checks.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
