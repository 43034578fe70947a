use interest_core::{
    compare_interest, compute_compound_interest, compute_simple_interest, InterestError,
    InterestInput, DEFAULT_COMPOUNDS_PER_YEAR,
};
use rust_decimal_macros::dec;

// ===========================================================================
// Public-surface tests: the two calculators and the comparison envelope,
// exercised through the crate root re-exports.
// ===========================================================================

// ---------------------------------------------------------------------------
// Reference scenario: $10,000 at 5% for 3 years, monthly compounding
// ---------------------------------------------------------------------------

#[test]
fn test_reference_simple_interest() {
    let interest = compute_simple_interest(10_000.0, 5.0, 3.0).unwrap();
    assert_eq!(interest, 1500.0);
    assert_eq!(10_000.0 + interest, 11_500.0);
}

#[test]
fn test_reference_compound_interest() {
    let ci = compute_compound_interest(10_000.0, 5.0, 3.0, Some(12)).unwrap();
    let expected = 10_000.0 * (1.0_f64 + 0.05 / 12.0).powf(36.0);
    assert!(
        (ci.total_amount - expected).abs() < 1e-9,
        "Expected {}, got {}",
        expected,
        ci.total_amount
    );
    assert!((ci.total_amount - 11_614.72).abs() < 0.005);
    assert!((ci.interest - 1_614.72).abs() < 0.005);
}

#[test]
fn test_reference_comparison_envelope() {
    let input = InterestInput::new(10_000.0, 5.0, 3.0).with_compounds_per_year(12);
    let out = compare_interest(&input).unwrap();
    assert_eq!(out.result.simple.total_amount, dec!(11500.00));
    assert_eq!(out.result.compound.total_amount, dec!(11614.72));
    assert_eq!(out.metadata.version, env!("CARGO_PKG_VERSION"));
    assert!(out.methodology.contains("Compound"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_default_frequency_is_annual() {
    assert_eq!(DEFAULT_COMPOUNDS_PER_YEAR, 1);
    let a = compute_compound_interest(1_000.0, 8.0, 2.0, None).unwrap();
    // 1000 * 1.08^2 = 1166.40
    assert!((a.total_amount - 1_166.40).abs() < 1e-9);
}

#[test]
fn test_total_never_below_principal_for_non_negative_inputs() {
    for rate in [0.0, 0.1, 4.0, 18.0] {
        for time in [0.0, 0.25, 1.0, 30.0] {
            for n in [1, 4, 12, 365] {
                let ci = compute_compound_interest(2_500.0, rate, time, Some(n)).unwrap();
                assert!(ci.total_amount >= 2_500.0, "R={rate} T={time} N={n}");
                let si = compute_simple_interest(2_500.0, rate, time).unwrap();
                assert!(si >= 0.0);
            }
        }
    }
}

#[test]
fn test_compounding_beats_simple_over_whole_periods() {
    for n in [1, 2, 4, 12, 52] {
        for years in [2.0, 5.0, 25.0] {
            let ci = compute_compound_interest(10_000.0, 6.0, years, Some(n)).unwrap();
            let si = compute_simple_interest(10_000.0, 6.0, years).unwrap();
            assert!(ci.interest >= si, "N={n} T={years}");
        }
    }
}

#[test]
fn test_calculators_are_safe_across_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            std::thread::spawn(move || compute_compound_interest(10_000.0, 5.0, 3.0, Some(n)))
        })
        .collect();
    let totals: Vec<f64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().total_amount)
        .collect();
    assert!(totals.windows(2).all(|w| w[0] < w[1]));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_input_messages_name_the_field() {
    let err = compute_compound_interest(10_000.0, 5.0, 3.0, Some(0)).unwrap_err();
    assert!(matches!(err, InterestError::InvalidInput { .. }));
    assert!(err.to_string().contains("compounds_per_year"));

    let err = compute_simple_interest(10_000.0, f64::NAN, 3.0).unwrap_err();
    assert!(err.to_string().contains("rate"));
}
