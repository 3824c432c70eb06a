//! antforge CLI: solve a 0/1 knapsack instance with an ant colony.

use std::path::PathBuf;
use std::process::ExitCode;

use antforge::{AcoConfig, AntForgeError, ConfigError, KnapsackProblem, ThreadCount};
use clap::Parser;
use thiserror::Error;

const DEMO_VALUES: [f64; 10] = [10.0, 5.0, 15.0, 7.0, 6.0, 18.0, 3.0, 12.0, 8.0, 14.0];
const DEMO_WEIGHTS: [f64; 10] = [2.0, 3.0, 5.0, 7.0, 1.0, 4.0, 1.0, 6.0, 3.0, 8.0];
const DEMO_CAPACITY: f64 = 20.0;

#[derive(Parser, Debug)]
#[command(name = "antforge")]
#[command(about = "Approximate a 0/1 knapsack instance with ant colony optimization")]
#[command(version)]
struct Cli {
    /// Item values, comma separated (defaults to the built-in 10-item instance)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<f64>>,

    /// Item weights, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    weights: Option<Vec<f64>>,

    /// Knapsack capacity
    #[arg(long)]
    capacity: Option<f64>,

    /// Colony settings file (.toml, .yaml or .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Agents per iteration
    #[arg(long)]
    ants: Option<usize>,

    /// Number of iterations
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Worker threads for construction (0 = sequential)
    #[arg(long)]
    threads: Option<usize>,

    /// Suppress banner and progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Solve(#[from] AntForgeError),

    #[error("--values, --weights and --capacity must be given together")]
    IncompleteInstance,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let problem = build_problem(cli)?;
    let config = build_config(cli)?;

    if !cli.quiet {
        antforge_console::init();
    }

    let result = antforge::solve_problem(problem.clone(), &config)?;
    antforge_console::print_report(&problem, &result);
    Ok(())
}

fn build_problem(cli: &Cli) -> Result<KnapsackProblem, CliError> {
    let problem = match (&cli.values, &cli.weights, cli.capacity) {
        (None, None, None) => KnapsackProblem::new(
            DEMO_VALUES.to_vec(),
            DEMO_WEIGHTS.to_vec(),
            DEMO_CAPACITY,
        )?,
        (Some(values), Some(weights), Some(capacity)) => {
            KnapsackProblem::new(values.clone(), weights.clone(), capacity)?
        }
        _ => return Err(CliError::IncompleteInstance),
    };
    Ok(problem)
}

fn build_config(cli: &Cli) -> Result<AcoConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => AcoConfig::load(path)?,
        None => reference_config(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(ants) = cli.ants {
        config = config.with_ants_per_iteration(ants);
    }
    if let Some(iterations) = cli.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(threads) = cli.threads {
        let thread_count = match threads {
            0 => ThreadCount::None,
            n => ThreadCount::Count(n),
        };
        config = config.with_thread_count(thread_count);
    }
    if cli.quiet {
        config = config.with_show_progress(false);
    }

    Ok(config)
}

// Settings the built-in instance is tuned for.
fn reference_config() -> AcoConfig {
    AcoConfig::default()
        .with_ants_per_iteration(30)
        .with_iterations(100)
        .with_exponents(1.0, 2.0)
        .with_rho(0.1)
        .with_q(100.0)
        .with_q0(0.05)
        .with_bounds(0.01, 20.0)
}
