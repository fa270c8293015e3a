use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory searched recursively for charts
    pub chart_search_root: PathBuf,
    /// Document template, relative to each chart directory
    pub template_file: String,
    /// Generated file, relative to each chart directory
    pub output_file: String,
    /// Print documents to stdout instead of writing them
    pub dry_run: bool,
    /// Globs (relative to the search root) of directories to skip
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_search_root: PathBuf::from("."),
            template_file: "README.md.tera".to_string(),
            output_file: "README.md".to_string(),
            dry_run: false,
            ignore: Vec::new(),
        }
    }
}
