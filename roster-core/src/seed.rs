//! Read-only YAML seed rosters.
//!
//! A seed file is a YAML list of employees. It is only ever read; the
//! registry built from it lives in memory.
//!
//! ```yaml
//! - first_name: Ada
//!   last_name: Lovelace
//!   email: ada@example.com
//!   position: ADMIN
//!   hire_date: 2021-03-01
//!   projects: [engine]
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::types::EmployeeDetails;

/// One seed entry. Identifiers are never part of the seed; the registry assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl SeedEmployee {
    pub fn into_parts(self) -> (EmployeeDetails, Vec<String>) {
        let details = EmployeeDetails {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            position: self.position,
            hire_date: self.hire_date,
        };
        (details, self.projects)
    }
}

/// Parse a seed roster from `path`.
///
/// Returns `RegistryError::SeedNotFound` if absent,
/// `RegistryError::Parse` (with path + line context) if malformed YAML.
/// An empty file is an empty roster.
pub fn load_seed(path: &Path) -> Result<Vec<SeedEmployee>, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::SeedNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
