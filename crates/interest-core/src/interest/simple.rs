use crate::types::{Percent, SimpleInterestResult, Years};
use crate::validation::require_finite;
use crate::InterestResult;

/// Simple interest: `principal * rate * time / 100`.
///
/// `rate` is a percentage. Signs are not restricted, so a negative input
/// yields negative interest. Only NaN and infinite arguments are rejected.
pub fn compute_simple_interest(principal: f64, rate: Percent, time: Years) -> InterestResult<f64> {
    let principal = require_finite("principal", principal)?;
    let rate = require_finite("rate", rate)?;
    let time = require_finite("time", time)?;

    let interest = principal * rate * time / 100.0;
    log::debug!("simple interest: P={principal} R={rate}% T={time}y -> {interest}");
    Ok(interest)
}

/// Simple interest together with the total amount owed at the end of the term.
pub fn simple_interest(principal: f64, rate: Percent, time: Years) -> InterestResult<SimpleInterestResult> {
    let interest = compute_simple_interest(principal, rate, time)?;
    Ok(SimpleInterestResult {
        interest,
        total_amount: principal + interest,
    })
}
