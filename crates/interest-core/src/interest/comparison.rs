use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::InterestError;
use crate::interest::compound::{compute_compound_interest, DEFAULT_COMPOUNDS_PER_YEAR};
use crate::interest::compounding::frequency_label;
use crate::interest::simple::simple_interest;
use crate::types::{to_money, with_metadata, ComputationOutput, InterestInput, Money, Percent, Years};
use crate::InterestResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Simple-interest figures ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestReport {
    pub principal: Money,
    pub rate: Percent,
    pub time: Years,
    pub interest: Money,
    pub total_amount: Money,
}

/// Compound-interest figures ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestReport {
    pub principal: Money,
    pub rate: Percent,
    pub time: Years,
    pub compounds_per_year: i64,
    pub frequency_label: String,
    pub interest: Money,
    pub total_amount: Money,
}

/// Both calculations on the same input, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestComparison {
    pub simple: SimpleInterestReport,
    pub compound: CompoundInterestReport,
    /// Compound total minus simple total.
    pub difference: Money,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn build_simple(input: &InterestInput) -> InterestResult<SimpleInterestReport> {
    let result = simple_interest(input.principal, input.rate, input.time)?;
    Ok(SimpleInterestReport {
        principal: to_money("principal", input.principal)?,
        rate: input.rate,
        time: input.time,
        interest: to_money("interest", result.interest)?,
        total_amount: to_money("total_amount", result.total_amount)?,
    })
}

fn build_compound(input: &InterestInput) -> InterestResult<CompoundInterestReport> {
    let n = input.compounds_per_year.unwrap_or(DEFAULT_COMPOUNDS_PER_YEAR);
    let result = compute_compound_interest(input.principal, input.rate, input.time, Some(n))?;
    Ok(CompoundInterestReport {
        principal: to_money("principal", input.principal)?,
        rate: input.rate,
        time: input.time,
        compounds_per_year: n,
        frequency_label: frequency_label(n),
        interest: to_money("interest", result.interest)?,
        total_amount: to_money("total_amount", result.total_amount)?,
    })
}

/// Non-fatal observations about the input. Negative values are accepted
/// by the calculators but usually indicate a data-entry mistake.
fn input_warnings(input: &InterestInput, compounding: bool) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.principal < 0.0 {
        warnings.push(format!("Negative principal ({}) yields negative interest", input.principal));
    }
    if input.rate < 0.0 {
        warnings.push(format!("Negative rate ({}%) models depreciation, not interest", input.rate));
    }
    if input.time < 0.0 {
        warnings.push(format!("Negative time ({} years) discounts rather than accrues", input.time));
    }
    if compounding {
        let n = input.compounds_per_year.unwrap_or(DEFAULT_COMPOUNDS_PER_YEAR);
        if input.time > 0.0 && (n as f64) * input.time < 1.0 {
            warnings.push(format!(
                "Term covers less than one compounding period (N={n}, T={}); compound interest may be below simple interest",
                input.time
            ));
        }
    }
    warnings
}

fn assumptions(input: &InterestInput) -> serde_json::Value {
    serde_json::json!({
        "principal": input.principal,
        "rate_pct": input.rate,
        "time_years": input.time,
        "compounds_per_year": input.compounds_per_year.unwrap_or(DEFAULT_COMPOUNDS_PER_YEAR),
    })
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Simple interest on `input`, wrapped in the standard output envelope.
pub fn simple_interest_report(
    input: &InterestInput,
) -> InterestResult<ComputationOutput<SimpleInterestReport>> {
    let start = Instant::now();
    let warnings = input_warnings(input, false);
    let report = build_simple(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simple Interest (I = P * R * T / 100)",
        &assumptions(input),
        warnings,
        elapsed,
        report,
    ))
}

/// Compound interest on `input`, wrapped in the standard output envelope.
pub fn compound_interest_report(
    input: &InterestInput,
) -> InterestResult<ComputationOutput<CompoundInterestReport>> {
    let start = Instant::now();
    let warnings = input_warnings(input, true);
    let report = build_compound(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound Interest (A = P * (1 + R/100/N)^(N*T), CI = A - P)",
        &assumptions(input),
        warnings,
        elapsed,
        report,
    ))
}

/// Run both calculators on the same input and report the gap between totals.
pub fn compare_interest(
    input: &InterestInput,
) -> InterestResult<ComputationOutput<InterestComparison>> {
    let start = Instant::now();
    let warnings = input_warnings(input, true);

    let simple = build_simple(input)?;
    let compound = build_compound(input)?;
    let difference = compound
        .total_amount
        .checked_sub(simple.total_amount)
        .ok_or_else(|| InterestError::Unrepresentable {
            field: "difference".into(),
            value: compound.total_amount.to_f64().unwrap_or(f64::NAN)
                - simple.total_amount.to_f64().unwrap_or(f64::NAN),
        })?;
    log::debug!(
        "comparison: simple total {} vs compound total {} (diff {difference})",
        simple.total_amount,
        compound.total_amount
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Simple vs Compound Interest comparison",
        &assumptions(input),
        warnings,
        elapsed,
        InterestComparison {
            simple,
            compound,
            difference,
        },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn reference_input() -> InterestInput {
        InterestInput::new(10_000.0, 5.0, 3.0).with_compounds_per_year(12)
    }

    #[test]
    fn test_simple_report_reference() {
        let out = simple_interest_report(&reference_input()).unwrap();
        assert_eq!(
            out.result,
            SimpleInterestReport {
                principal: dec!(10000.00),
                rate: 5.0,
                time: 3.0,
                interest: dec!(1500.00),
                total_amount: dec!(11500.00),
            }
        );
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_compound_report_reference() {
        let out = compound_interest_report(&reference_input()).unwrap();
        let r = &out.result;
        assert_eq!(r.compounds_per_year, 12);
        assert_eq!(r.frequency_label, "Monthly");
        assert_eq!(r.total_amount, dec!(11614.72));
        assert_eq!(r.interest, dec!(1614.72));
    }

    #[test]
    fn test_compound_report_defaults_to_annual() {
        let out = compound_interest_report(&InterestInput::new(10_000.0, 5.0, 3.0)).unwrap();
        assert_eq!(out.result.compounds_per_year, 1);
        assert_eq!(out.result.frequency_label, "Annually");
        assert_eq!(out.result.total_amount, dec!(11576.25));
    }

    #[test]
    fn test_comparison_difference() {
        let out = compare_interest(&reference_input()).unwrap();
        let cmp = &out.result;
        assert_eq!(cmp.simple.total_amount, dec!(11500.00));
        assert_eq!(cmp.compound.total_amount, dec!(11614.72));
        assert_eq!(cmp.difference, dec!(114.72));
        assert_eq!(out.assumptions["compounds_per_year"], 12);
    }

    #[test]
    fn test_money_serializes_as_cents_string() {
        let out = simple_interest_report(&reference_input()).unwrap();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["result"]["interest"], "1500.00");
        assert_eq!(value["result"]["total_amount"], "11500.00");
    }

    #[test]
    fn test_negative_inputs_warn_but_succeed() {
        let input = InterestInput::new(-500.0, -2.0, 1.0);
        let out = compare_interest(&input).unwrap();
        assert_eq!(out.warnings.len(), 2);
        assert!(out.warnings[0].contains("Negative principal"));
        assert!(out.warnings[1].contains("Negative rate"));
    }

    #[test]
    fn test_sub_period_term_warns() {
        let input = InterestInput::new(10_000.0, 5.0, 0.5);
        let out = compare_interest(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.result.compound.interest < out.result.simple.interest);
    }

    #[test]
    fn test_invalid_frequency_propagates() {
        let input = InterestInput::new(10_000.0, 5.0, 3.0).with_compounds_per_year(0);
        assert!(matches!(
            compare_interest(&input),
            Err(InterestError::InvalidInput { .. })
        ));
        // The simple report never reads the frequency.
        assert!(simple_interest_report(&input).is_ok());
    }

    #[test]
    fn test_overflowing_total_is_unrepresentable() {
        let input = InterestInput::new(1_000.0, 500.0, 1_000.0);
        assert!(matches!(
            compound_interest_report(&input),
            Err(InterestError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn test_difference_overflow_is_unrepresentable() {
        // Simple total -6e28 and compound total 3.375e28 each fit; their gap does not.
        let input = InterestInput::new(1.5e28, -250.0, 2.0).with_compounds_per_year(1);
        match compare_interest(&input) {
            Err(InterestError::Unrepresentable { field, value }) => {
                assert_eq!(field, "difference");
                assert!(value > 7.9e28);
            }
            other => panic!("expected Unrepresentable, got {other:?}"),
        }
    }
}
