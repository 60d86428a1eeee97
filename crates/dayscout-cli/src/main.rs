use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "dayscout-cli")]
#[command(about = "Aggregate places from JSON payloads and assemble a day plan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize and budget-filter places from payload files.
    Places(PipelineArgs),
    /// Build a single-day plan from payload files.
    Plan(PipelineArgs),
}

#[derive(Debug, Args)]
struct PipelineArgs {
    /// JSON payload files of source-tagged records.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Per-person budget ceiling; defaults to DAYSCOUT_DEFAULT_BUDGET.
    #[arg(long)]
    budget: Option<Decimal>,

    /// Group size; defaults to DAYSCOUT_DEFAULT_GROUP_SIZE.
    #[arg(long)]
    people: Option<u32>,

    /// Pricing tables YAML; overrides DAYSCOUT_PRICING_PATH.
    #[arg(long)]
    pricing: Option<PathBuf>,

    /// Emit JSON instead of human-readable output.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dayscout_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Places(args) => run::places(&config, &args),
        Commands::Plan(args) => run::plan(&config, &args),
    }
}
