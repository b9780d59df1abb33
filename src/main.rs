use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reflexion_review::report;
use reflexion_review::{MatchConfig, Reviewer};

#[derive(Parser)]
#[command(name = "reflexion-review")]
#[command(about = "Reconcile a design's requirement model against an implementation inventory", long_about = None)]
#[command(version)]
struct Cli {
    /// Requirement model extracted from the design document (JSON)
    #[arg(long)]
    design: PathBuf,

    /// Implementation inventory extracted from the codebase (JSON)
    #[arg(long)]
    inventory: PathBuf,

    /// Matching thresholds (TOML); defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print a count summary to stderr
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => report::load_config(path).context("loading match config")?,
        None => MatchConfig::default(),
    };
    let requirements = report::load_requirement_model(&cli.design).context("loading requirement model")?;
    let implementation =
        report::load_implementation_model(&cli.inventory).context("loading implementation model")?;

    let mut reviewer = Reviewer::with_config(requirements, implementation, config);
    let result = reviewer.review();

    match &cli.out {
        Some(path) => report::write_json(result, path).context("writing report")?,
        None => println!("{}", report::to_json_string(result)?),
    }

    if cli.summary {
        eprint!("{}", report::render_summary(result));
    }

    Ok(())
}
