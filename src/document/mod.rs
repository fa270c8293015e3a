//! Markdown documentation for charts.
//!
//! - `model`: the data templates see
//! - `template`: built-in section templates and per-chart overrides
//! - `generate`: rendering, writing, and whole-tree runs

pub mod generate;
pub mod model;
pub mod template;

pub use generate::{
    GenerationSummary, document_chart, generate_all, render_chart_documentation,
    write_chart_documentation,
};
pub use model::{ChartTemplateContext, ValueRow};
