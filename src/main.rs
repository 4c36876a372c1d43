use chainbench_report::{pipeline, ReportError};

use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_IMAGES: &str = r#"{"geth":"default","reth":"default","nethermind":"default","erigon":"default","besu":"default"}"#;

#[derive(Parser, Debug)]
#[command(name = "chainbench-report")]
#[command(about = "Aggregate blockchain client benchmark results into JSON and HTML reports")]
#[command(version)]
struct Cli {
    /// Directory containing raw result files
    #[arg(long = "resultsPath", default_value = "results")]
    results_path: PathBuf,

    /// JSON object mapping client identifiers to display labels
    #[arg(long, default_value = DEFAULT_IMAGES)]
    images: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let overrides: BTreeMap<String, String> = serde_json::from_str(&cli.images)
        .map_err(|e| ReportError::ImagesOverride(e.to_string()))?;

    pipeline::run(&cli.results_path, Path::new("images.yaml"), overrides)?;

    println!("Done!");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}
