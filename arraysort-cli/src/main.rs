use anyhow::{Context, Result};
use arraysort::{
    Algorithm, Benchmark, JsonFormatter, ReportFormatter, RunConfig, RunReport, SortError,
    TextFormatter,
};
use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arraysort")]
#[command(about = "Time a classic sorting algorithm on a random array", long_about = None)]
#[command(version)]
struct Cli {
    /// Sorting algorithm: TrivialSort | BubbleSort | InsertionSort | MergeSort | HeapSort | QuickSort
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Size of the array to be sorted
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for input generation and pivot selection
    #[arg(long, env = "ARRAYSORT_SEED")]
    seed: Option<u64>,

    /// Smallest value that may be generated
    #[arg(long)]
    min_value: Option<u64>,

    /// Largest value that may be generated
    #[arg(long)]
    max_value: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        list_algorithms();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_parts(
        cli.algorithm.as_deref(),
        cli.size,
        cli.seed,
        cli.min_value,
        cli.max_value,
    )
    .map_err(SortError::from)?;

    let benchmark = Benchmark::new(config);
    tracing::info!(seed = benchmark.seed(), "starting run");
    let report = benchmark.run()?;

    let formatter: Box<dyn ReportFormatter> = match cli.format {
        Format::Text => Box::new(TextFormatter),
        Format::Json => Box::new(JsonFormatter),
    };
    println!("{}", formatter.format_report(&report));

    if let Some(path) = &cli.output {
        write_report(&report, path)?;
    }

    Ok(())
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = JsonFormatter.format_report(report);
    std::fs::write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<SortError>() {
        Some(SortError::Config(config_err)) => {
            eprintln!("{}", config_err.to_string().red());
            eprintln!();
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(2)
        }
        Some(sort_err) if sort_err.is_config() => {
            eprintln!("{}", sort_err.to_string().red());
            ExitCode::from(2)
        }
        Some(sort_err) => {
            eprintln!("{} {}", "ERROR:".red().bold(), sort_err);
            ExitCode::FAILURE
        }
        None => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn list_algorithms() {
    println!("{}", "Available algorithms:".bold());
    println!();

    for algorithm in Algorithm::ALL {
        print!("  {} ", "●".bright_cyan());
        print!("{}", format!("{:<14}", algorithm.name()).cyan().bold());
        print!(" {}", algorithm.complexity());
        if algorithm.is_stable() {
            print!(" {}", "(stable)".green());
        }
        println!();
    }

    println!();
    println!(
        "{}",
        "Usage: arraysort --algorithm <NAME> --size <N>".bright_black()
    );
}
