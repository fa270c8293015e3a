//! Rendering and writing chart documentation.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::chart::{ChartDocumentationInfo, parse_chart_information};
use crate::config::Config;
use crate::discover::{IgnoreRules, find_chart_directories};
use crate::document::model::ChartTemplateContext;
use crate::document::template::{DOCUMENT_TEMPLATE, load_templates};
use crate::error::{HelmDocsError, Result};

/// Outcome of a documentation run over a search root.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Charts whose documentation was written (or printed).
    pub generated: Vec<PathBuf>,
    /// Charts that were skipped, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Render the documentation for a parsed chart.
pub fn render_chart_documentation(info: &ChartDocumentationInfo, config: &Config) -> Result<String> {
    let tera = load_templates(&info.chart_directory, &config.template_file)?;
    let context = tera::Context::from_serialize(ChartTemplateContext::new(info))?;
    Ok(tera.render(DOCUMENT_TEMPLATE, &context)?)
}

/// Render a chart's documentation and write it next to the chart, or to
/// stdout on a dry run.
pub fn write_chart_documentation(info: &ChartDocumentationInfo, config: &Config) -> Result<()> {
    let document = render_chart_documentation(info, config)?;

    if config.dry_run {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(document.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| HelmDocsError::io("<stdout>", e))?;
        return Ok(());
    }

    let output_path = info.chart_directory.join(&config.output_file);
    std::fs::write(&output_path, document).map_err(|e| HelmDocsError::io(&output_path, e))?;
    log::info!("Generated documentation for chart {}", info.chart_directory.display());
    Ok(())
}

/// Parse, render and write one chart directory.
pub fn document_chart(chart_dir: &Path, config: &Config) -> Result<()> {
    let info = parse_chart_information(chart_dir)?;
    write_chart_documentation(&info, config)
}

/// Document every chart below the configured search root.
///
/// Charts are processed in parallel. A chart that fails is logged and
/// recorded in the summary; the others still run.
pub fn generate_all(config: &Config) -> Result<GenerationSummary> {
    let ignore = IgnoreRules::new(&config.ignore)?;
    let charts = find_chart_directories(&config.chart_search_root, &ignore)?;
    log::info!(
        "Found {} chart(s) under {}",
        charts.len(),
        config.chart_search_root.display()
    );

    // Dry runs print whole documents, which must not interleave
    let results: Vec<(PathBuf, Result<()>)> = if config.dry_run {
        charts
            .into_iter()
            .map(|dir| {
                let result = document_chart(&dir, config);
                (dir, result)
            })
            .collect()
    } else {
        charts
            .into_par_iter()
            .map(|dir| {
                let result = document_chart(&dir, config);
                (dir, result)
            })
            .collect()
    };

    let mut summary = GenerationSummary::default();
    for (dir, result) in results {
        match result {
            Ok(()) => summary.generated.push(dir),
            Err(e) => {
                log::warn!("Skipping documentation for chart {}: {}", dir.display(), e);
                summary.failed.push((dir, e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_chart(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("Chart.yaml"),
            r#"apiVersion: v2
name: web
version: 1.0.0-rc.1
description: A web server
type: application
appVersion: "2.4"
home: https://example.com
sources:
  - https://github.com/example/web
maintainers:
  - name: Ops
    email: ops@example.com
"#,
        )
        .unwrap();
        fs::write(
            dir.join("values.yaml"),
            r#"# replicaCount -- Number of replicas to deploy
replicaCount: 3
image:
  # image.tag -- The image tag to use
  # @default -- "latest"
  tag: stable
  pullPolicy: IfNotPresent
"#,
        )
        .unwrap();
    }

    #[test]
    fn test_render_default_document() {
        let dir = TempDir::new().unwrap();
        write_chart(dir.path());

        let info = parse_chart_information(dir.path()).unwrap();
        let doc = render_chart_documentation(&info, &Config::default()).unwrap();

        assert!(doc.starts_with("# web\n"));
        assert!(doc.contains("Version-1.0.0--rc.1-informational"));
        assert!(doc.contains("![Type: application]"));
        assert!(doc.contains("A web server"));
        assert!(doc.contains("**Homepage:** <https://example.com>"));
        assert!(doc.contains("| Ops | ops@example.com |  |"));
        assert!(doc.contains("* <https://github.com/example/web>"));
        assert!(!doc.contains("## Requirements"));
        assert!(!doc.contains("deprecated"));
        assert!(doc.contains("| image.pullPolicy | string | `\"IfNotPresent\"` |  |"));
        assert!(doc.contains("| image.tag | string | \"latest\" | The image tag to use |"));
        assert!(doc.contains("| replicaCount | int | `3` | Number of replicas to deploy |"));
    }

    #[test]
    fn test_custom_template() {
        let dir = TempDir::new().unwrap();
        write_chart(dir.path());
        fs::write(
            dir.path().join("README.md.tera"),
            "{% include \"chart.header\" %}\n\n{% include \"chart.valuesTable\" %}\n",
        )
        .unwrap();

        let info = parse_chart_information(dir.path()).unwrap();
        let doc = render_chart_documentation(&info, &Config::default()).unwrap();
        assert!(doc.starts_with("# web\n\n| Key | Type | Default | Description |"));
        assert!(!doc.contains("Homepage"));
    }

    #[test]
    fn test_generate_all_writes_and_skips_broken_charts() {
        let root = TempDir::new().unwrap();
        write_chart(&root.path().join("charts/web"));
        let broken = root.path().join("charts/broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join("Chart.yaml"), "apiVersion: v2\nname: broken\nversion: 0.1.0\n").unwrap();

        let config = Config {
            chart_search_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let summary = generate_all(&config).unwrap();

        assert_eq!(summary.generated, vec![root.path().join("charts/web")]);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.has_failures());
        assert!(root.path().join("charts/web/README.md").is_file());
        assert!(!broken.join("README.md").exists());
    }
}
