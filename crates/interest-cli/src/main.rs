mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::interest::InterestArgs;

/// Simple and compound interest calculations
#[derive(Parser)]
#[command(
    name = "interest",
    version,
    about = "Simple and compound interest calculations",
    long_about = "Computes simple interest (P * R * T / 100) and compound interest \
                  (P * (1 + R/100/N)^(N*T) - P) for a principal, annual percentage rate, \
                  term in years and compounding frequency, and compares the two. \
                  Inputs come from flags, --input <file.json>, or JSON piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "report", global = true)]
    output: OutputFormat,

    /// Log calculation details to stderr (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interest: I = P * R * T / 100
    Simple(InterestArgs),
    /// Compound interest: A = P * (1 + R/100/N)^(N*T)
    Compound(InterestArgs),
    /// Run both calculations and compare the totals
    Compare(InterestArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Report,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simple(args) => commands::interest::run_simple(args),
        Commands::Compound(args) => commands::interest::run_compound(args),
        Commands::Compare(args) => commands::interest::run_compare(args),
        Commands::Version => {
            println!("interest {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
