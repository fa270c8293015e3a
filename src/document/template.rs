//! Documentation templates.
//!
//! Every section of the default README is a named Tera template, so a
//! chart's own template can pull in just the pieces it wants:
//!
//! ```text
//! {% include "chart.header" %}
//!
//! Some hand-written introduction.
//!
//! {% include "chart.valuesSection" %}
//! ```

use std::path::Path;

use tera::Tera;

use crate::error::{HelmDocsError, Result};

/// Name the document template is registered under.
pub const DOCUMENT_TEMPLATE: &str = "document";

const DEFAULT_DOCUMENT_TEMPLATE: &str = r#"{% include "chart.header" %}
{% include "chart.deprecationWarning" %}

{% include "chart.versionBadge" %}{% include "chart.typeBadge" %}{% include "chart.appVersionBadge" %}

{% include "chart.description" %}

{% include "chart.homepage" %}

{% include "chart.maintainersSection" %}

{% include "chart.sourcesSection" %}

{% include "chart.requirementsSection" %}

{% include "chart.valuesSection" %}
"#;

const HEADER: &str = "# {{ name }}";

const DEPRECATION_WARNING: &str =
    "{% if deprecated %}> **:exclamation: This Helm Chart is deprecated!**{% endif %}";

const VERSION_BADGE: &str = "![Version: {{ version }}](https://img.shields.io/badge/Version-{{ version | replace(from=\"-\", to=\"--\") }}-informational?style=flat-square) ";

const TYPE_BADGE: &str = "{% if type %}![Type: {{ type }}](https://img.shields.io/badge/Type-{{ type }}-informational?style=flat-square) {% endif %}";

const APP_VERSION_BADGE: &str = "{% if app_version %}![AppVersion: {{ app_version }}](https://img.shields.io/badge/AppVersion-{{ app_version | replace(from=\"-\", to=\"--\") }}-informational?style=flat-square){% endif %}";

const DESCRIPTION: &str = "{% if description %}{{ description }}{% endif %}";

const HOMEPAGE: &str = "{% if home %}**Homepage:** <{{ home }}>{% endif %}";

const MAINTAINERS_HEADER: &str = "## Maintainers";

const MAINTAINERS_TABLE: &str = r#"| Name | Email | Url |
| ---- | ------ | --- |
{%- for maintainer in maintainers %}
| {{ maintainer.name }} | {{ maintainer.email }} | {{ maintainer.url }} |
{%- endfor %}"#;

const MAINTAINERS_SECTION: &str = r#"{% if maintainers %}{% include "chart.maintainersHeader" %}

{% include "chart.maintainersTable" %}{% endif %}"#;

const SOURCES_HEADER: &str = "## Source Code";

const SOURCES: &str = r#"{%- for source in sources %}
* <{{ source }}>
{%- endfor %}"#;

const SOURCES_SECTION: &str = r#"{% if sources %}{% include "chart.sourcesHeader" %}
{% include "chart.sources" %}{% endif %}"#;

const REQUIREMENTS_HEADER: &str = "## Requirements";

const KUBE_VERSION: &str = "{% if kube_version %}Kubernetes: `{{ kube_version }}`{% endif %}";

const REQUIREMENTS_TABLE: &str = r#"| Repository | Name | Version |
|------------|------|---------|
{%- for dependency in dependencies %}
| {{ dependency.repository }} | {{ dependency.name }} | {{ dependency.version }} |
{%- endfor %}"#;

const REQUIREMENTS_SECTION: &str = r#"{% if dependencies or kube_version %}{% include "chart.requirementsHeader" %}
{% if kube_version %}
{% include "chart.kubeVersion" %}
{% endif %}{% if dependencies %}
{% include "chart.requirementsTable" %}{% endif %}{% endif %}"#;

const VALUES_HEADER: &str = "## Values";

const VALUES_TABLE: &str = r#"| Key | Type | Default | Description |
|-----|------|---------|-------------|
{%- for value in values %}
| {{ value.key }} | {{ value.type }} | {{ value.default }} | {{ value.description }} |
{%- endfor %}"#;

const VALUES_SECTION: &str = r#"{% if values %}{% include "chart.valuesHeader" %}

{% include "chart.valuesTable" %}{% endif %}"#;

/// The named section templates, in the order they appear in the default document.
pub fn builtin_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        ("chart.header", HEADER),
        ("chart.deprecationWarning", DEPRECATION_WARNING),
        ("chart.versionBadge", VERSION_BADGE),
        ("chart.typeBadge", TYPE_BADGE),
        ("chart.appVersionBadge", APP_VERSION_BADGE),
        ("chart.description", DESCRIPTION),
        ("chart.homepage", HOMEPAGE),
        ("chart.maintainersHeader", MAINTAINERS_HEADER),
        ("chart.maintainersTable", MAINTAINERS_TABLE),
        ("chart.maintainersSection", MAINTAINERS_SECTION),
        ("chart.sourcesHeader", SOURCES_HEADER),
        ("chart.sources", SOURCES),
        ("chart.sourcesSection", SOURCES_SECTION),
        ("chart.requirementsHeader", REQUIREMENTS_HEADER),
        ("chart.kubeVersion", KUBE_VERSION),
        ("chart.requirementsTable", REQUIREMENTS_TABLE),
        ("chart.requirementsSection", REQUIREMENTS_SECTION),
        ("chart.valuesHeader", VALUES_HEADER),
        ("chart.valuesTable", VALUES_TABLE),
        ("chart.valuesSection", VALUES_SECTION),
    ]
}

/// Read the chart's own document template, if it has one.
pub fn read_document_template(chart_dir: &Path, template_file: &str) -> Result<Option<String>> {
    let path = chart_dir.join(template_file);
    if !path.is_file() {
        log::debug!(
            "Did not find template file {} for chart {}, using default template",
            template_file,
            chart_dir.display()
        );
        return Ok(None);
    }

    log::debug!("Using template file {} for chart {}", template_file, chart_dir.display());
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| HelmDocsError::io(&path, e))
}

/// Build the template set for a chart: all sections plus the document template.
pub fn load_templates(chart_dir: &Path, template_file: &str) -> Result<Tera> {
    let document = read_document_template(chart_dir, template_file)?;
    build_templates(document.as_deref())
}

/// Build the template set from an optional document template body.
pub fn build_templates(document: Option<&str>) -> Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);

    let mut templates: Vec<(&str, &str)> = builtin_templates();
    templates.push((DOCUMENT_TEMPLATE, document.unwrap_or(DEFAULT_DOCUMENT_TEMPLATE)));
    tera.add_raw_templates(templates)?;

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_all_sections_registered() {
        let tera = build_templates(None).unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for (name, _) in builtin_templates() {
            assert!(names.contains(&name), "missing {}", name);
        }
        assert!(names.contains(&DOCUMENT_TEMPLATE));
    }

    #[test]
    fn test_custom_template_from_chart_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md.tera"), "custom {{ name }}").unwrap();

        let tera = load_templates(dir.path(), "README.md.tera").unwrap();
        let mut context = tera::Context::new();
        context.insert("name", "web");
        assert_eq!(tera.render(DOCUMENT_TEMPLATE, &context).unwrap(), "custom web");
    }

    #[test]
    fn test_missing_template_uses_default() {
        let dir = TempDir::new().unwrap();
        assert!(read_document_template(dir.path(), "README.md.tera").unwrap().is_none());
    }

    #[test]
    fn test_invalid_template() {
        let err = build_templates(Some("{% if %}")).unwrap_err();
        assert!(matches!(err, HelmDocsError::Template(_)));
    }
}
