//! `roster list <seed>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::output::print_employees;

/// Arguments for `roster list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// YAML seed roster to load.
    pub seed: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::load_registry(&self.seed)?;
        print_employees(&registry.list_all(), self.json)
    }
}
