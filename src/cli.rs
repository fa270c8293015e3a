use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "helm-docs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Markdown documentation for Helm charts")]
#[command(long_about = "Finds every Helm chart below the search root and renders a README from its Chart.yaml, its dependencies, and the documentation comments in its values.yaml.")]
pub struct Cli {
    /// Directory to search recursively for charts
    #[arg(short = 'c', long, value_name = "DIR")]
    pub chart_search_root: Option<PathBuf>,

    /// Document template file, relative to each chart directory
    #[arg(short, long, value_name = "FILE")]
    pub template_file: Option<String>,

    /// Generated file, relative to each chart directory
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<String>,

    /// Print the generated documents instead of writing them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip directories matching this glob (relative to the search root); repeatable
    #[arg(short, long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Search root used to locate the configuration file
    pub fn search_root(&self) -> PathBuf {
        self.chart_search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Apply command-line flags on top of file configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(root) = &self.chart_search_root {
            config.chart_search_root = root.clone();
        }
        if let Some(template) = &self.template_file {
            config.template_file = template.clone();
        }
        if let Some(output) = &self.output_file {
            config.output_file = output.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        config.ignore.extend(self.ignore.iter().cloned());
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let level = if self.quiet {
            log::LevelFilter::Error
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
