use crate::error::InterestError;
use crate::InterestResult;

/// Reject NaN and infinite values before they reach the arithmetic.
pub fn require_finite(field: &str, value: f64) -> InterestResult<f64> {
    if !value.is_finite() {
        return Err(InterestError::InvalidInput {
            field: field.into(),
            reason: format!("must be a finite number, got {value}"),
        });
    }
    Ok(value)
}

/// Compounding frequency must be a positive count of periods per year.
pub fn require_positive_compounds(n: i64) -> InterestResult<u32> {
    if n <= 0 {
        return Err(InterestError::InvalidInput {
            field: "compounds_per_year".into(),
            reason: format!("must be a positive integer, got {n}"),
        });
    }
    u32::try_from(n).map_err(|_| InterestError::InvalidInput {
        field: "compounds_per_year".into(),
        reason: format!("must not exceed {}, got {n}", u32::MAX),
    })
}
