use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cart_to_csv::{
    Config, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ExtractionReport, convert_cart_file,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "cart2csv",
    version,
    about = "Convert a labeled shopping-cart text file into CSV"
)]
struct Cli {
    /// Input cart text path.
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output CSV path.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn run_convert(cli: &Cli) -> Result<ExtractionReport> {
    let config = Config {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
    };

    convert_cart_file(&config)
        .with_context(|| format!("failed to convert '{}'", cli.input.display()))
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} marker={:?}: {}",
                warning.code, warning.marker, warning.message
            );
        }
    }
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cart_to_csv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run_convert(&cli) {
        Ok(report) => {
            log_report(&report, cli.verbose);
            println!("Extraction complete. Data saved to {}.", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}
