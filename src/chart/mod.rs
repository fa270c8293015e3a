//! Reading everything a chart's documentation is built from.
//!
//! - Chart.yaml metadata
//! - dependency lists (requirements.yaml or Chart.yaml)
//! - values.yaml structure
//! - values.yaml documentation comments

pub mod comments;
pub mod metadata;
pub mod requirements;
pub mod values;

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::Result;

pub use comments::{ScanState, ValueDescription, ValueDescriptions, parse_values_comments};
pub use metadata::{ApiVersion, ChartMetadata, ChartType, Maintainer};
pub use requirements::Dependency;
pub use values::{FlatValue, ValueType};

/// Everything parsed out of one chart directory.
#[derive(Debug, Clone)]
pub struct ChartDocumentationInfo {
    pub chart_directory: PathBuf,
    pub metadata: ChartMetadata,
    /// Sorted by `<repository>/<name>`.
    pub dependencies: Vec<Dependency>,
    pub values: Value,
    pub value_descriptions: ValueDescriptions,
}

impl ChartDocumentationInfo {
    /// Leaves of the values tree; documented mappings stay whole.
    pub fn flat_values(&self) -> Vec<FlatValue> {
        values::flatten_values(&self.values, &self.value_descriptions)
    }
}

/// Parse a chart directory. The first failing file aborts the chart.
pub fn parse_chart_information(chart_directory: &Path) -> Result<ChartDocumentationInfo> {
    let chart_yaml = chart_directory.join("Chart.yaml");
    let values_yaml = chart_directory.join("values.yaml");

    let metadata = metadata::parse_chart_yaml_file(&chart_yaml).inspect_err(log_read_error)?;
    let dependencies = requirements::parse_requirements(chart_directory, &metadata.api_version)
        .inspect_err(log_read_error)?;
    let values = values::parse_values_yaml_file(&values_yaml).inspect_err(log_read_error)?;
    let value_descriptions =
        comments::read_values_comments_file(&values_yaml).inspect_err(log_read_error)?;

    log::debug!(
        "Parsed chart {} ({} dependencies, {} documented values)",
        metadata.name,
        dependencies.len(),
        value_descriptions.len()
    );

    Ok(ChartDocumentationInfo {
        chart_directory: chart_directory.to_path_buf(),
        metadata,
        dependencies,
        values,
        value_descriptions,
    })
}

fn log_read_error(err: &crate::error::HelmDocsError) {
    if err.is_not_found() {
        log::debug!("Required chart file missing: {}", err);
    } else {
        log::debug!("Error reading chart file: {}", err);
    }
}
