pub mod types;

use crate::error::{HelmDocsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use types::Config;

const CONFIG_FILE_NAME: &str = ".helm-docs.toml";

/// Get the local config file path (search-root/.helm-docs.toml)
pub fn local_config_path(search_root: &Path) -> PathBuf {
    search_root.join(CONFIG_FILE_NAME)
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| HelmDocsError::Config(e.to_string()))
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| HelmDocsError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| HelmDocsError::Config(format!("{}: {}", path.display(), e)))
}

/// Load configuration from file or use defaults.
/// An explicit path must exist; otherwise the search root's config file is
/// used when present.
pub fn load_config(explicit: Option<&Path>, search_root: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("Loading configuration from {}", path.display());
        return read_config_file(path);
    }

    let local = local_config_path(search_root);
    if local.is_file() {
        log::debug!("Loading configuration from {}", local.display());
        return read_config_file(&local);
    }

    Ok(Config::default())
}
