use crate::types::{CompoundInterestResult, Percent, Years};
use crate::validation::{require_finite, require_positive_compounds};
use crate::InterestResult;

/// Compounding frequency used when the caller does not supply one.
pub const DEFAULT_COMPOUNDS_PER_YEAR: i64 = 1;

/// Compound interest and total amount.
///
/// `A = P * (1 + (R / 100) / N)^(N * T)`, `interest = A - P`, where `N` is
/// `compounds_per_year` and falls back to [`DEFAULT_COMPOUNDS_PER_YEAR`]
/// (annual compounding) when `None`.
///
/// Uses plain `f64::powf`. Very large `N * T` exponents lose precision under
/// IEEE-754 doubles and can overflow to infinity; no correction is applied.
pub fn compute_compound_interest(
    principal: f64,
    rate: Percent,
    time: Years,
    compounds_per_year: Option<i64>,
) -> InterestResult<CompoundInterestResult> {
    let principal = require_finite("principal", principal)?;
    let rate = require_finite("rate", rate)?;
    let time = require_finite("time", time)?;
    let n = require_positive_compounds(compounds_per_year.unwrap_or(DEFAULT_COMPOUNDS_PER_YEAR))?;

    let n = f64::from(n);
    let periodic_rate = rate / 100.0 / n;
    let total_amount = principal * (1.0 + periodic_rate).powf(n * time);

    if !total_amount.is_finite() {
        log::warn!("compound total overflowed: P={principal} R={rate}% T={time}y N={n}");
    }
    log::debug!("compound interest: P={principal} R={rate}% T={time}y N={n} -> A={total_amount}");

    Ok(CompoundInterestResult {
        interest: total_amount - principal,
        total_amount,
    })
}
