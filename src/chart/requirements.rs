//! Chart dependency lists.
//!
//! Helm 2 charts (`apiVersion: v1`) keep dependencies in requirements.yaml,
//! which is optional. Helm 3 charts list them under `dependencies` in
//! Chart.yaml.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::metadata::ApiVersion;
use crate::chart::values::is_blank_document;
use crate::error::{HelmDocsError, Result};

/// Chart dependency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dependency {
    pub name: String,
    /// Version constraint (SemVer)
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl Dependency {
    /// Sort key, `<repository>/<name>`.
    pub fn requirement_key(&self) -> String {
        format!("{}/{}", self.repository.as_deref().unwrap_or(""), self.name)
    }
}

#[derive(Debug, Default, Deserialize)]
struct DependencyList {
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

/// Parse a `dependencies:` list out of YAML content.
pub fn parse_dependencies(content: &str, path: &Path) -> Result<Vec<Dependency>> {
    if is_blank_document(content) {
        return Ok(Vec::new());
    }

    // A bare `~` document is null
    let list: Option<DependencyList> =
        serde_yaml::from_str(content).map_err(|e| HelmDocsError::yaml(path, e))?;
    let mut dependencies = list.unwrap_or_default().dependencies;
    dependencies.sort_by_key(Dependency::requirement_key);
    Ok(dependencies)
}

/// Load the dependencies of the chart in `chart_dir`, sorted by requirement key.
pub fn parse_requirements(chart_dir: &Path, api_version: &ApiVersion) -> Result<Vec<Dependency>> {
    let path = match api_version {
        ApiVersion::V1 => {
            let path = chart_dir.join("requirements.yaml");
            if !path.exists() {
                log::debug!("No requirements.yaml in {}", chart_dir.display());
                return Ok(Vec::new());
            }
            path
        }
        _ => chart_dir.join("Chart.yaml"),
    };

    let content = std::fs::read_to_string(&path).map_err(|e| HelmDocsError::io(&path, e))?;
    parse_dependencies(&content, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dependencies_sorted_by_repository_then_name() {
        let yaml = r#"
dependencies:
  - name: redis
    version: "17.0.0"
    repository: https://charts.bitnami.com/bitnami
  - name: common
    version: "1.x.x"
    repository: https://a.example.com/charts
  - name: postgresql
    version: "12.0.0"
    repository: https://charts.bitnami.com/bitnami
"#;
        let deps = parse_dependencies(yaml, Path::new("Chart.yaml")).unwrap();
        let names: Vec<&str> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["common", "postgresql", "redis"]);
    }

    #[test]
    fn test_no_dependencies() {
        let deps = parse_dependencies("name: x\nversion: 1.0.0\n", Path::new("Chart.yaml")).unwrap();
        assert!(deps.is_empty());
        let deps = parse_dependencies("", Path::new("requirements.yaml")).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_v1_without_requirements_file() {
        let dir = TempDir::new().unwrap();
        let deps = parse_requirements(dir.path(), &ApiVersion::V1).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_v1_reads_requirements_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("requirements.yaml"),
            "dependencies:\n  - name: mysql\n    version: 1.0.0\n    repository: \"@stable\"\n",
        )
        .unwrap();

        let deps = parse_requirements(dir.path(), &ApiVersion::V1).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].requirement_key(), "@stable/mysql");
    }

    #[test]
    fn test_v2_requires_chart_yaml() {
        let dir = TempDir::new().unwrap();
        let err = parse_requirements(dir.path(), &ApiVersion::V2).unwrap_err();
        assert!(err.is_not_found());
    }
}
