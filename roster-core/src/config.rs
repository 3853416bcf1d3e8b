//! User configuration at `~/.roster/config.yaml`.
//!
//! # API pattern
//!
//! - `load_config_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `load_config()` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! A missing file is not an error: defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::RegistryError;

/// Page size used by `search` when the caller gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// `tracing` filter directive used when `ROSTER_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub default_page_size: u32,
    pub log_filter: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// `<home>/.roster/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".roster").join("config.yaml")
}

/// Load the config under `home`, falling back to defaults when the file is absent.
///
/// Returns `RegistryError::Parse` (with path) for malformed YAML and
/// `RegistryError::InvalidConfig` for a zero page size or a `log_filter` that
/// is not a valid `tracing` filter directive.
pub fn load_config_at(home: &Path) -> Result<RosterConfig, RegistryError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(RosterConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    // An empty file deserializes to `null`, which serde_yaml rejects for structs.
    if contents.trim().is_empty() {
        return Ok(RosterConfig::default());
    }
    let config: RosterConfig =
        serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse { path, source: e })?;
    if config.default_page_size == 0 {
        return Err(RegistryError::InvalidConfig(
            "default_page_size must be at least 1".to_owned(),
        ));
    }
    if let Err(err) = EnvFilter::try_new(&config.log_filter) {
        return Err(RegistryError::InvalidConfig(format!(
            "log_filter `{}` is not a valid filter: {err}",
            config.log_filter
        )));
    }
    Ok(config)
}

/// `load_config_at` convenience wrapper.
pub fn load_config() -> Result<RosterConfig, RegistryError> {
    load_config_at(&home()?)
}

fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(home: &TempDir, body: &str) {
        let path = config_path_at(home.path());
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(path, body).expect("write");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let home = TempDir::new().expect("tempdir");
        let config = load_config_at(home.path()).expect("load");
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "default_page_size: 25\n");
        let config = load_config_at(home.path()).expect("load");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "default_page_size: 0\n");
        let err = load_config_at(home.path()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfig(_)), "got: {err}");
    }

    #[test]
    fn valid_log_filter_is_accepted() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "log_filter: roster_core=debug,warn\n");
        let config = load_config_at(home.path()).expect("load");
        assert_eq!(config.log_filter, "roster_core=debug,warn");
    }

    #[test]
    fn invalid_log_filter_is_rejected() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "log_filter: roster_core=loudest\n");
        let err = load_config_at(home.path()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfig(_)), "got: {err}");
        assert!(err.to_string().contains("roster_core=loudest"));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "default_page_size: [unclosed\n");
        let err = load_config_at(home.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("config.yaml"));
    }
}
