use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wf_project::{CompiledCase, compile_case, load_case};
use wf_solver::{single_traverse, vlp_curve};

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "WellFlow CLI - Wellbore pressure traverse and lift curve tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Pressure and temperature profile for one flow rate
    Traverse {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Flow rate in stb/d (defaults to the first rate in the case)
        #[arg(long)]
        rate: Option<f64>,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Bottomhole pressure for every rate in the case
    Vlp {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Case error: {0}")]
    Project(#[from] wf_project::ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] wf_solver::SolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Traverse {
            case_path,
            rate,
            output,
        } => cmd_traverse(&case_path, rate, output.as_deref()),
        Commands::Vlp { case_path, output } => cmd_vlp(&case_path, output.as_deref()),
    }
}

fn load(case_path: &Path) -> CliResult<CompiledCase> {
    let case = load_case(case_path)?;
    Ok(compile_case(&case)?)
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let compiled = load(case_path)?;
    println!("✓ Case '{}' is valid", compiled.name);
    println!("  Rates: {}", compiled.rates.len());
    println!("  Steps: {}", compiled.well.geometry.whole_steps());
    Ok(())
}

fn cmd_traverse(case_path: &Path, rate: Option<f64>, output: Option<&Path>) -> CliResult<()> {
    let compiled = load(case_path)?;
    let rate = match rate {
        Some(rate) => rate,
        None => compiled.rates.first().copied().ok_or_else(|| {
            CliError::InvalidInput("case has no rates; pass --rate".to_string())
        })?,
    };

    let start = Instant::now();
    let traverse = single_traverse(&compiled.well, rate, &compiled.config)?;
    info!(
        case = %compiled.name,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "traverse finished"
    );

    write_json(&traverse, output)
}

fn cmd_vlp(case_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let compiled = load(case_path)?;

    let start = Instant::now();
    let curve = vlp_curve(&compiled.well, &compiled.rates, &compiled.config)?;
    info!(
        case = %compiled.name,
        rates = curve.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "lift curve finished"
    );

    write_json(&curve, output)
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
