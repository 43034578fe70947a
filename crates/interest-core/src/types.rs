use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InterestError;
use crate::InterestResult;

/// Monetary values as presented to callers, rounded to cents.
pub type Money = Decimal;

/// Annual rate as a percentage (5.0 = 5%). Not a decimal fraction.
pub type Percent = f64;

/// Durations in years.
pub type Years = f64;

/// Inputs shared by both calculators.
///
/// `compounds_per_year` is only read by the compound calculator; `None`
/// means compounding once a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestInput {
    pub principal: f64,
    pub rate: Percent,
    pub time: Years,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounds_per_year: Option<i64>,
}

impl InterestInput {
    pub fn new(principal: f64, rate: Percent, time: Years) -> Self {
        Self {
            principal,
            rate,
            time,
            compounds_per_year: None,
        }
    }

    pub fn with_compounds_per_year(mut self, n: i64) -> Self {
        self.compounds_per_year = Some(n);
        self
    }
}

/// Outcome of the linear calculation. `total_amount = principal + interest`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total_amount: f64,
}

/// Outcome of the compounding calculation. `interest = total_amount - principal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub interest: f64,
    pub total_amount: f64,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64_ieee754_rounded_to_cents".to_string(),
        },
    }
}

/// Convert an f64 amount into `Money`, rounded to two decimal places.
pub fn to_money(field: &str, value: f64) -> InterestResult<Money> {
    Decimal::from_f64_retain(value)
        .map(|d| {
            let mut cents = d.round_dp(2);
            cents.rescale(2);
            cents
        })
        .ok_or_else(|| InterestError::Unrepresentable {
            field: field.into(),
            value,
        })
}
