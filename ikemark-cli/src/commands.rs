use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use ikemark_analysis::analyze;
use ikemark_config::{ConfigError, IkemarkConfig};
use ikemark_report::{print_summary, SummaryReport};
use ikemark_simulator::SimulationRunner;
use ikemark_telemetry::logging::EventLogger;
use ikemark_telemetry::metrics::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full benchmark: simulate, analyze, and report
    Run(RunArgs),
    /// Load and validate a configuration file, then exit
    Validate(ValidateArgs),
    /// Print the algorithm and scenario catalogues
    List(ListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Configuration file (built-in defaults and `config/ikemark.yaml`
    /// when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the master seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Override the report output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Configuration file to check
    pub config: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => run_benchmark(cli.verbose, args),
        Commands::Validate(args) => validate_config(args),
        Commands::List(args) => list_catalogue(args),
    }
}

/// The full pipeline: load config, simulate, analyze, report.
fn run_benchmark(verbose: bool, args: RunArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(output) = args.output {
        config.report.output_dir = output;
    }

    let filter = if verbose {
        "debug"
    } else {
        config.telemetry.log_filter.as_str()
    };
    EventLogger::init(filter);

    if !args.no_banner {
        print_banner(&config);
    }
    info!(seed = config.simulation.seed, "Starting benchmark run");

    let metrics = MetricsRecorder::new();
    let runner = SimulationRunner::from_config(&config, metrics.clone());
    let results = runner.run()?;
    let analysis = analyze(&results)?;

    let report = SummaryReport::build(&results, &analysis);
    let path = report.write_json(&config.report.output_dir)?;

    print_summary(&analysis);
    println!("Summary report: {}", path.display());

    if config.telemetry.dump_metrics {
        print!("{}", metrics.gather_metrics()?);
    }
    Ok(())
}

fn validate_config(args: ValidateArgs) -> anyhow::Result<()> {
    let config = IkemarkConfig::load_from_path(&args.config)?;
    println!(
        "Configuration OK: {} crypto families, {} scenarios, seed {}",
        config.algorithms.len(),
        config.scenarios.len(),
        config.simulation.seed
    );
    Ok(())
}

fn list_catalogue(args: ListArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    println!("Algorithms:");
    for (family, algorithms) in &config.algorithms {
        println!("  {}:", family.to_uppercase());
        for spec in algorithms {
            println!("    - {} ({} bits)", spec.name, spec.key_size);
        }
    }

    println!();
    println!("Scenarios:");
    for scenario in &config.scenarios {
        let net = &scenario.network_conditions;
        println!(
            "  - {} (latency {} ms, bandwidth {} Mbps, loss {}%, {} iterations)",
            scenario.name,
            net.latency_ms,
            net.bandwidth_mbps,
            net.packet_loss_percent,
            scenario.test_parameters.handshake_iterations
        );
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<IkemarkConfig, ConfigError> {
    match path {
        Some(path) => IkemarkConfig::load_from_path(path),
        None => IkemarkConfig::load(),
    }
}

fn print_banner(config: &IkemarkConfig) {
    println!("+--------------------------------------------------------------+");
    println!("|                 IKEv2 Post-Quantum Benchmark                 |");
    println!("|                                                              |");
    println!("|  Comparing classical, hybrid, and post-quantum suites        |");
    println!("+--------------------------------------------------------------+");
    println!();
    println!("Algorithms to test:");
    for (family, algorithms) in &config.algorithms {
        println!("  {}:", family.to_uppercase());
        for spec in algorithms {
            println!("    - {} ({} bits)", spec.name, spec.key_size);
        }
    }
    println!();
}
