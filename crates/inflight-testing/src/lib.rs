//! Testing infrastructure for inflight.
//!
//! - `fixtures`: captured dbt logs used as regression inputs
//! - `builder`: fluent construction of synthetic dbt logs
//! - `assertions`: checks every open-task report must satisfy

pub mod assertions;
pub mod builder;
pub mod fixtures;

pub use builder::LogBuilder;
pub use fixtures::Fixture;
