//! Chart.yaml parser.
//!
//! Only the fields that end up in generated documentation are modelled.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HelmDocsError, Result};

/// Helm Chart API version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Helm 2 style charts, dependencies live in requirements.yaml
    V1,
    /// Helm 3 style charts, dependencies live in Chart.yaml
    #[default]
    V2,
    /// Unknown/invalid version
    Unknown(String),
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "v1" => ApiVersion::V1,
            "v2" => ApiVersion::V2,
            other => ApiVersion::Unknown(other.to_string()),
        })
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl ApiVersion {
    pub fn as_str(&self) -> &str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
            ApiVersion::Unknown(s) => s,
        }
    }
}

/// Chart type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Application,
    Library,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Application => "application",
            ChartType::Library => "library",
        }
    }
}

/// Chart maintainer information.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Maintainer {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// Parsed Chart.yaml metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartMetadata {
    /// The chart API version (v1 or v2)
    #[serde(rename = "apiVersion", default)]
    pub api_version: ApiVersion,

    /// The name of the chart
    pub name: String,

    /// A SemVer 2 version
    #[serde(default)]
    pub version: String,

    /// Kubernetes version constraint
    #[serde(rename = "kubeVersion")]
    pub kube_version: Option<String>,

    /// A single-sentence description of this project
    pub description: Option<String>,

    /// The type of the chart (application or library)
    #[serde(rename = "type")]
    pub chart_type: Option<ChartType>,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// The URL of this projects home page
    pub home: Option<String>,

    /// A list of URLs to source code for this project
    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub maintainers: Vec<Maintainer>,

    pub icon: Option<String>,

    /// The version of the app that this contains
    #[serde(rename = "appVersion")]
    pub app_version: Option<String>,

    pub deprecated: Option<bool>,
}

impl ChartMetadata {
    /// Check if this is a v1 (Helm 2) chart.
    pub fn is_v1(&self) -> bool {
        matches!(self.api_version, ApiVersion::V1)
    }

    /// Check if the chart is marked as deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }
}

/// Parse Chart.yaml content. `path` is only used for error reporting.
pub fn parse_chart_yaml(content: &str, path: &Path) -> Result<ChartMetadata> {
    serde_yaml::from_str(content).map_err(|e| HelmDocsError::yaml(path, e))
}

/// Parse Chart.yaml from a file path.
pub fn parse_chart_yaml_file(path: &Path) -> Result<ChartMetadata> {
    let content = std::fs::read_to_string(path).map_err(|e| HelmDocsError::io(path, e))?;
    parse_chart_yaml(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<ChartMetadata> {
        parse_chart_yaml(yaml, Path::new("Chart.yaml"))
    }

    #[test]
    fn test_parse_minimal_chart() {
        let yaml = r#"
apiVersion: v2
name: test-chart
version: 0.1.0
"#;
        let chart = parse(yaml).unwrap();
        assert_eq!(chart.name, "test-chart");
        assert_eq!(chart.version, "0.1.0");
        assert!(!chart.is_v1());
        assert!(!chart.is_deprecated());
    }

    #[test]
    fn test_parse_full_chart() {
        let yaml = r#"
apiVersion: v2
name: my-app
version: 1.2.3
kubeVersion: ">=1.19.0"
description: A sample application
type: application
keywords:
  - app
  - example
home: https://example.com
sources:
  - https://github.com/example/my-app
maintainers:
  - name: John Doe
    email: john@example.com
icon: https://example.com/icon.png
appVersion: "2.0.0"
dependencies:
  - name: postgresql
    version: "~11.0"
    repository: https://charts.bitnami.com/bitnami
"#;
        let chart = parse(yaml).unwrap();
        assert_eq!(chart.name, "my-app");
        assert_eq!(chart.version, "1.2.3");
        assert_eq!(chart.kube_version, Some(">=1.19.0".to_string()));
        assert_eq!(chart.description, Some("A sample application".to_string()));
        assert_eq!(chart.chart_type, Some(ChartType::Application));
        assert_eq!(chart.app_version, Some("2.0.0".to_string()));
        assert_eq!(chart.sources.len(), 1);
        assert_eq!(chart.maintainers[0].name, "John Doe");
        assert_eq!(chart.maintainers[0].url, None);
    }

    #[test]
    fn test_parse_v1_chart() {
        let yaml = r#"
apiVersion: v1
name: legacy-chart
version: 1.0.0
"#;
        assert!(parse(yaml).unwrap().is_v1());
    }

    #[test]
    fn test_unknown_api_version() {
        let yaml = "apiVersion: v9\nname: x\nversion: 1.0.0\n";
        let chart = parse(yaml).unwrap();
        assert_eq!(chart.api_version, ApiVersion::Unknown("v9".to_string()));
        assert_eq!(chart.api_version.as_str(), "v9");
    }

    #[test]
    fn test_deprecated_chart() {
        let yaml = r#"
apiVersion: v2
name: old-chart
version: 1.0.0
deprecated: true
"#;
        assert!(parse(yaml).unwrap().is_deprecated());
    }

    #[test]
    fn test_parse_error() {
        let err = parse("invalid: [yaml").unwrap_err();
        assert!(matches!(err, HelmDocsError::Yaml { .. }));
    }
}
