//! `roster search <seed> [filters] [--page N] [--size N]`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use roster_core::{RosterConfig, SearchQuery};

use crate::output::print_employees;

/// Arguments for `roster search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// YAML seed roster to load.
    pub seed: PathBuf,

    /// Exact first name, case-insensitive.
    #[arg(long)]
    pub first_name: Option<String>,

    /// Exact last name, case-insensitive.
    #[arg(long)]
    pub last_name: Option<String>,

    /// Exact position, case-insensitive.
    #[arg(long)]
    pub position: Option<String>,

    /// 1-based page number. 0 is treated as 1.
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size. Defaults to `default_page_size` from ~/.roster/config.yaml.
    #[arg(long)]
    pub size: Option<u32>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn run(self, config: &RosterConfig) -> Result<()> {
        let registry = super::load_registry(&self.seed)?;
        let query = SearchQuery {
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            page: self.page,
            size: self.size.unwrap_or(config.default_page_size),
        };
        print_employees(&registry.search(&query), self.json)
    }
}
