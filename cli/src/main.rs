//! π Estimator CLI
//!
//! Command-line interface for the series and Riemann-sum estimators and the
//! iteration-count optimizer.

mod console;

use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use pi_estimator_core::optimizer::DEFAULT_START_STEP;
use pi_estimator_core::{
    find_optimum_n, parse_iterations, resolve_iterations, run_estimate, run_rectangle,
    DriverConfig, ElapsedTime, EstimatorMethod, NoProgress, NoSearchObserver, RiemannVariant,
    SearchConfig, SearchRound,
};
use serde_json::json;
use std::error::Error;
use std::io::{self, Write};
use std::process;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use console::ConsoleProgress;

#[derive(ClapParser)]
#[command(name = "pi-estimator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate π with series or Riemann sums", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate π with the paired Leibniz series
    Series {
        /// Number of term pairs (defaults to one billion)
        #[arg(allow_hyphen_values = true)]
        n: Option<String>,
    },

    /// Estimate π with under- and overestimating Riemann sums
    Riemann {
        /// Number of rectangles (defaults to one billion)
        #[arg(allow_hyphen_values = true)]
        n: Option<String>,
    },

    /// Search for the rectangle count with the smallest error
    Optimize {
        /// First rectangle count to evaluate (multiple of 10)
        #[arg(allow_hyphen_values = true)]
        start_n: Option<String>,

        /// Initial step size (multiple of 10)
        #[arg(long, default_value_t = DEFAULT_START_STEP)]
        step: i64,

        /// Which rectangle estimate to evaluate: under, over or both
        #[arg(long, default_value_t = RiemannVariant::Over)]
        variant: RiemannVariant,
    },
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    let config = DriverConfig::default();
    let result = match cli.command {
        Commands::Series { n } => run_series(n.as_deref(), &config, cli.format),
        Commands::Riemann { n } => run_riemann(n.as_deref(), &config, cli.format),
        Commands::Optimize {
            start_n,
            step,
            variant,
        } => run_optimize(start_n.as_deref(), step, variant, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "pi_estimator={level},pi_estimator_core={level}"
        )))
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &impl serde::Serialize) -> CliResult {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn run_series(arg: Option<&str>, config: &DriverConfig, format: OutputFormat) -> CliResult {
    let n = resolve_iterations(arg, config)?;
    info!(n, "running series estimator");

    match format {
        OutputFormat::Text => {
            let mut stdout = io::stdout();
            console::write_series_banner(&mut stdout)?;
            let mut progress = ConsoleProgress::stdout();
            let report = run_estimate(EstimatorMethod::Series, n, &mut progress)?;
            progress.finish()?;
            console::write_results(&mut stdout, &report)?;
        }
        OutputFormat::Json => {
            let report = run_estimate(EstimatorMethod::Series, n, &mut NoProgress)?;
            print_json(&report)?;
        }
    }
    Ok(())
}

fn run_riemann(arg: Option<&str>, config: &DriverConfig, format: OutputFormat) -> CliResult {
    let n = resolve_iterations(arg, config)?;
    info!(n, "running rectangle estimator");

    match format {
        OutputFormat::Text => {
            let mut stdout = io::stdout();
            console::write_riemann_banner(&mut stdout)?;
            let mut progress = ConsoleProgress::stdout();
            let report = run_rectangle(n, &mut progress)?;
            progress.finish()?;
            console::write_bounds(&mut stdout, &report)?;
            console::write_results(&mut stdout, &report.combined)?;
        }
        OutputFormat::Json => {
            let report = run_rectangle(n, &mut NoProgress)?;
            print_json(&json!({
                "underestimate": report.under(),
                "overestimate": report.over(),
                "combined": report.combined,
            }))?;
        }
    }
    Ok(())
}

fn run_optimize(
    start_n: Option<&str>,
    step: i64,
    variant: RiemannVariant,
    format: OutputFormat,
) -> CliResult {
    let mut config = SearchConfig {
        start_step: step,
        ..SearchConfig::default()
    };
    if let Some(raw) = start_n {
        config.start_n = parse_iterations(raw)?;
    }
    config.validate()?;
    info!(start_n = config.start_n, step = config.start_step, %variant, "running optimizer");

    let start = Instant::now();
    match format {
        OutputFormat::Text => {
            let mut stdout = io::stdout();
            console::write_search_banner(&mut stdout)?;

            // Rounds are reported from inside the search; keep the first write error
            let mut round_out = io::stdout();
            let mut write_error: Option<io::Error> = None;
            let mut observer = |round: &SearchRound| {
                if write_error.is_none() {
                    write_error = console::write_round(&mut round_out, round).err();
                }
            };
            let outcome = find_optimum_n(&config, variant, &mut observer)?;
            if let Some(e) = write_error {
                return Err(e.into());
            }

            console::write_outcome(&mut stdout, &outcome)?;
            console::write_elapsed(&mut stdout, &ElapsedTime::since(start))?;
        }
        OutputFormat::Json => {
            let outcome = find_optimum_n(&config, variant, &mut NoSearchObserver)?;
            print_json(&json!({
                "variant": variant,
                "config": config,
                "outcome": outcome,
                "elapsed": ElapsedTime::since(start),
            }))?;
        }
    }
    Ok(())
}
