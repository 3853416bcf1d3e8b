//! Error types for roster-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::EmployeeId;

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `add` was called with an email already held by another employee.
    #[error("employee with email {email} already exists")]
    DuplicateEmail { email: String },

    /// No employee is registered under the given identifier.
    #[error("employee not found with id: {id}")]
    NotFound { id: EmployeeId },

    /// Deleting this employee would leave the registry without an admin.
    #[error("cannot delete employee {id}: it is the only admin")]
    CannotDeleteLastAdmin { id: EmployeeId },

    /// Underlying I/O failure while reading a config or seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The seed roster file did not exist at the given path.
    #[error("seed roster not found at {path}")]
    SeedNotFound { path: PathBuf },

    /// Config file parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.roster/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
