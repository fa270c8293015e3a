//! # helm-docs
//!
//! Generates Markdown documentation for Helm charts.
//!
//! ## How values are documented
//!
//! Comments in `values.yaml` of the form `# <key> -- <description>` document
//! the named key. Following comment lines extend the description, and
//! `# @default -- <text>` replaces the default shown in the values table:
//!
//! ```yaml
//! # image.tag -- The image tag to use
//! # @default -- the chart appVersion
//! image:
//!   tag: ""
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use helm_docs::{Config, generate_all};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = generate_all(&Config::default())?;
//! println!("documented {} chart(s)", summary.generated.len());
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod discover;
pub mod document;
pub mod error;

// Re-export commonly used types and functions
pub use chart::{ChartDocumentationInfo, ValueDescription, ValueDescriptions, parse_chart_information};
pub use config::Config;
pub use document::{GenerationSummary, generate_all, render_chart_documentation};
pub use error::{HelmDocsError, Result};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
