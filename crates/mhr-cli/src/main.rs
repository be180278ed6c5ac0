mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::investment::InvestmentArgs;
use commands::labor::{ToolsArgs, WagesArgs};
use commands::rate::{RateArgs, TotalCostArgs};
use commands::sections::{ConsumablesArgs, PowerArgs, SpaceArgs};
use config::CliConfig;

/// Machine hour rate calculations
#[derive(Parser)]
#[command(
    name = "mhr",
    version,
    about = "Machine hour rate calculations",
    long_about = "A CLI for costing a machine by the hour with decimal precision. \
                  Prices investment, space, power, consumables, tools, wages and \
                  overhead salaries, then applies a profit margin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path to a YAML file with default settings
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log calculation steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Depreciation and interest cost per hour
    Investment(InvestmentArgs),
    /// Factory space cost per hour
    Space(SpaceArgs),
    /// Electricity cost per hour, with the genset tariff for comparison
    Power(PowerArgs),
    /// Coolant, waste, maintenance and other consumables per hour
    Consumables(ConsumablesArgs),
    /// Tool cost per hour
    Tools(ToolsArgs),
    /// Direct wages and overhead salaries per hour
    Wages(WagesArgs),
    /// Cost per hour so far for a possibly incomplete machine
    TotalCost(TotalCostArgs),
    /// Final machine hour rate including profit
    Rate(RateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Investment(args) => commands::investment::run_investment(args),
        Commands::Space(args) => commands::sections::run_space(args, &config),
        Commands::Power(args) => commands::sections::run_power(args),
        Commands::Consumables(args) => commands::sections::run_consumables(args, &config),
        Commands::Tools(args) => commands::labor::run_tools(args, &config),
        Commands::Wages(args) => commands::labor::run_wages(args, &config),
        Commands::TotalCost(args) => commands::rate::run_total_cost(args, &config),
        Commands::Rate(args) => commands::rate::run_rate(args, &config),
        Commands::Version => {
            println!("mhr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&str>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => CliConfig::from_yaml_file(path)?,
        None => CliConfig::default(),
    };
    let errors = config.validate();
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(mhr_core::MhrError::Config(joined.join("; ")).into());
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
