pub mod list;
pub mod run;
pub mod search;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use roster_core::{seed, EmployeeRegistry};

/// Parse the seed roster at `path` and replay it into a fresh registry.
pub fn load_registry(path: &Path) -> Result<EmployeeRegistry> {
    let entries = seed::load_seed(path)
        .with_context(|| format!("failed to read seed roster '{}'", path.display()))?;
    let count = entries.len();
    let registry = EmployeeRegistry::from_seed(entries)
        .with_context(|| format!("seed roster '{}' violates registry rules", path.display()))?;
    tracing::debug!(seed = %path.display(), count, "registry seeded");
    Ok(registry)
}
