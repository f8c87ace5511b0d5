use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use bmstat::aggregate;
use bmstat::config::{self, Overrides};
use bmstat::display;
use bmstat::errors::BmstatError;
use bmstat::run;
use bmstat::types::AveragingMode;

#[derive(Parser)]
#[command(
    name = "bmstat",
    version,
    about = "Run a benchmark executable repeatedly and average its reported timings"
)]
struct Cli {
    /// Benchmark executable to run (overrides `program` in the config file)
    program: Option<PathBuf>,

    /// Number of times to run the program
    #[arg(short = 'n', long)]
    runs: Option<usize>,

    /// How repeated runs are averaged
    #[arg(long)]
    mode: Option<AveragingMode>,

    /// Config file (default: ./bmstat.toml, then the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print per-run progress
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Arguments passed through to the benchmark program
    #[arg(last = true)]
    args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "bmstat=debug" } else { "bmstat=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config_dir = dirs::config_dir();
    let file = config::discover_config(cli.config.as_deref(), &cwd, config_dir.as_deref())?;

    let settings = config::resolve(
        Overrides {
            program: cli.program,
            runs: cli.runs,
            mode: cli.mode,
            args: cli.args,
        },
        file,
    )?;

    let results = aggregate::collect_benchmark_statistics(settings.runs, settings.mode, |idx| {
        if !cli.quiet {
            eprintln!("{}", display::format_progress(&settings.program, idx, settings.runs));
        }
        run::run_benchmark(&settings.program, &settings.args)
    })?;

    if results.is_empty() {
        return Err(BmstatError::NoBenchmarksFound {
            program: settings.program,
        }
        .into());
    }

    print!("{}", display::format_report(&results));

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
