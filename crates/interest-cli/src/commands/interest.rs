use clap::Args;
use serde_json::Value;

use interest_core::interest::comparison;
use interest_core::InterestInput;

use crate::input;

/// Arguments shared by every interest calculation.
///
/// Flag defaults reproduce the reference scenario: $10,000 at 5% for
/// 3 years, compounded monthly.
#[derive(Args, Debug, Clone)]
pub struct InterestArgs {
    /// Path to JSON input file (overrides the individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount
    #[arg(long, default_value_t = 10_000.0, allow_hyphen_values = true)]
    pub principal: f64,

    /// Annual rate as a percentage (5 = 5%)
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub rate: f64,

    /// Time period in years
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    pub time: f64,

    /// Compounding periods per year (compound and compare only)
    #[arg(long, default_value_t = 12, allow_hyphen_values = true)]
    pub compounds_per_year: i64,
}

impl InterestArgs {
    fn to_input(&self) -> InterestInput {
        InterestInput::new(self.principal, self.rate, self.time)
            .with_compounds_per_year(self.compounds_per_year)
    }
}

/// File first, then piped stdin, then the command-line flags.
fn resolve_input(args: &InterestArgs) -> Result<InterestInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        log::debug!("reading interest input from {path}");
        return input::file::read_json(path);
    }
    if let Some(piped) = input::stdin::read_stdin::<InterestInput>()? {
        log::debug!("reading interest input from stdin");
        return Ok(piped);
    }
    Ok(args.to_input())
}

pub fn run_simple(args: InterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let interest_input = resolve_input(&args)?;
    let result = comparison::simple_interest_report(&interest_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compound(args: InterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let interest_input = resolve_input(&args)?;
    let result = comparison::compound_interest_report(&interest_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compare(args: InterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let interest_input = resolve_input(&args)?;
    let result = comparison::compare_interest(&interest_input)?;
    Ok(serde_json::to_value(result)?)
}
