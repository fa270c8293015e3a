//! Data handed to the templates.

use serde::Serialize;
use serde_yaml::Value;

use crate::chart::{ChartDocumentationInfo, Dependency, FlatValue, Maintainer, ValueDescriptions};

/// One row of the values table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRow {
    pub key: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub default: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintainerContext {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl From<&Maintainer> for MaintainerContext {
    fn from(m: &Maintainer) -> Self {
        Self {
            name: m.name.clone(),
            email: m.email.clone().unwrap_or_default(),
            url: m.url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyContext {
    pub name: String,
    pub version: String,
    pub repository: String,
    pub alias: String,
}

impl From<&Dependency> for DependencyContext {
    fn from(d: &Dependency) -> Self {
        Self {
            name: d.name.clone(),
            version: d.version.clone().unwrap_or_default(),
            repository: d.repository.clone().unwrap_or_default(),
            alias: d.alias.clone().unwrap_or_default(),
        }
    }
}

/// Template context for one chart. Absent optional fields are empty strings
/// so templates can test them with a plain `{% if %}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChartTemplateContext {
    pub name: String,
    pub version: String,
    pub api_version: String,
    pub kube_version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub app_version: String,
    pub deprecated: bool,
    pub home: String,
    pub icon: String,
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
    pub maintainers: Vec<MaintainerContext>,
    pub dependencies: Vec<DependencyContext>,
    pub values: Vec<ValueRow>,
}

impl ChartTemplateContext {
    pub fn new(info: &ChartDocumentationInfo) -> Self {
        let meta = &info.metadata;
        Self {
            name: meta.name.clone(),
            version: meta.version.clone(),
            api_version: meta.api_version.as_str().to_string(),
            kube_version: meta.kube_version.clone().unwrap_or_default(),
            description: meta.description.clone().unwrap_or_default(),
            chart_type: meta
                .chart_type
                .as_ref()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            app_version: meta.app_version.clone().unwrap_or_default(),
            deprecated: meta.is_deprecated(),
            home: meta.home.clone().unwrap_or_default(),
            icon: meta.icon.clone().unwrap_or_default(),
            keywords: meta.keywords.clone(),
            sources: meta.sources.clone(),
            maintainers: meta.maintainers.iter().map(MaintainerContext::from).collect(),
            dependencies: info.dependencies.iter().map(DependencyContext::from).collect(),
            values: value_rows(&info.flat_values(), &info.value_descriptions),
        }
    }
}

/// Join flattened values with their documentation, sorted by key.
///
/// Keys without a documentation record get an empty description and their
/// literal default.
pub fn value_rows(values: &[FlatValue], descriptions: &ValueDescriptions) -> Vec<ValueRow> {
    let mut rows: Vec<ValueRow> = values
        .iter()
        .map(|value| {
            let doc = descriptions.get(&value.key);
            ValueRow {
                key: value.key.clone(),
                value_type: value.value_type.to_string(),
                default: doc
                    .and_then(|d| d.default.clone())
                    .unwrap_or_else(|| format_default(&value.value)),
                description: doc.map(|d| d.description.clone()).unwrap_or_default(),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

/// Literal default as inline code, e.g. `` `"nginx"` `` or `` `{}` ``.
pub fn format_default(value: &Value) -> String {
    match value {
        Value::Null => "`nil`".to_string(),
        other => match serde_json::to_string(other) {
            Ok(json) => format!("`{}`", json),
            Err(e) => {
                log::debug!("Falling back to YAML for default value: {}", e);
                let yaml = serde_yaml::to_string(other).unwrap_or_default();
                format!("`{}`", yaml.trim_end())
            }
        },
    }
}
