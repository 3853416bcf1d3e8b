//! Roster core library — employee types, the in-memory registry, errors.
//!
//! Public API surface:
//! - [`types`] — `EmployeeId`, `Employee`, `EmployeeDetails`, `SearchQuery`
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`EmployeeRegistry`]
//! - [`config`] — `~/.roster/config.yaml`
//! - [`seed`] — read-only YAML seed rosters

pub mod config;
pub mod error;
pub mod registry;
pub mod seed;
pub mod types;

pub use config::RosterConfig;
pub use error::RegistryError;
pub use registry::EmployeeRegistry;
pub use seed::SeedEmployee;
pub use types::{Employee, EmployeeDetails, EmployeeId, SearchQuery, ADMIN_POSITION};
