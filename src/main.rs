use clap::Parser;
use helm_docs::{cli::Cli, config, document};
use std::process;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns false when at least one chart could not be documented.
fn run(cli: &Cli) -> helm_docs::Result<bool> {
    let mut config = config::load_config(cli.config.as_deref(), &cli.search_root())?;
    cli.apply_to(&mut config);
    log::debug!("Effective configuration: {:?}", config);

    let summary = document::generate_all(&config)?;

    if summary.generated.is_empty() && summary.failed.is_empty() {
        log::warn!("No charts found under {}", config.chart_search_root.display());
    }
    for (dir, reason) in &summary.failed {
        eprintln!("Failed to document {}: {}", dir.display(), reason);
    }

    Ok(!summary.has_failures())
}
