//! `roster show <seed> <id>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use roster_core::{EmployeeId, RegistryError};

use crate::output::print_employees;

/// Arguments for `roster show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// YAML seed roster to load.
    pub seed: PathBuf,

    /// Employee id (assigned from 1 in seed order).
    pub id: u64,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::load_registry(&self.seed)?;
        let id = EmployeeId(self.id);
        let employee = registry
            .get(id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })?;
        if self.json {
            return crate::output::print_json(&employee);
        }
        print_employees(std::slice::from_ref(&employee), false)
    }
}
