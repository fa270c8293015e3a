//! Chart discovery.
//!
//! A chart is any directory containing a `Chart.yaml`. Charts nested inside
//! other charts (`charts/` subcharts) are found too.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{HelmDocsError, Result};

/// Directories that never contain charts worth documenting.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "vendor"];

/// Compiled ignore globs, matched against paths relative to the search root.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<glob::Pattern>,
}

impl IgnoreRules {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p)
                    .map_err(|e| HelmDocsError::Config(format!("invalid ignore pattern '{}': {}", p, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Check a path relative to the search root, or its final component.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        let name = relative.file_name().map(|n| n.to_string_lossy());
        self.patterns.iter().any(|pattern| {
            pattern.matches_path(relative) || name.as_deref().is_some_and(|n| pattern.matches(n))
        })
    }
}

fn should_skip_dir(name: &str) -> bool {
    (name.starts_with('.') && name != "." && name != "..") || SKIPPED_DIRS.contains(&name)
}

/// Find every chart directory below `root`, sorted by path.
pub fn find_chart_directories(root: &Path, ignore: &IgnoreRules) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(HelmDocsError::Discovery(format!(
            "chart search root {} is not a directory",
            root.display()
        )));
    }

    let mut charts = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        let skip_name = e.file_name().to_str().is_some_and(should_skip_dir);
        let relative = e.path().strip_prefix(root).unwrap_or(e.path());
        if !skip_name && ignore.is_ignored(relative) {
            log::debug!("Ignoring {}", e.path().display());
            return false;
        }
        !skip_name
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable path during chart discovery: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() && entry.path().join("Chart.yaml").is_file() {
            log::debug!("Found chart directory {}", entry.path().display());
            charts.push(entry.into_path());
        }
    }

    charts.sort();
    Ok(charts)
}
