use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt::Write;

use interest_core::interest::comparison::{
    CompoundInterestReport, InterestComparison, SimpleInterestReport,
};
use interest_core::interest::compounding::Compounding;

use super::{json, result_of};

const RULE: &str = "-----------------------------------";

/// Print the labelled console report, falling back to JSON for results
/// that are not interest reports.
pub fn print_report(value: &Value) {
    match render_report(value) {
        Some(text) => print!("{}", text),
        None => json::print_json(value),
    }
}

fn render_report(value: &Value) -> Option<String> {
    let result = result_of(value);
    let mut out = String::new();

    if let Ok(cmp) = serde_json::from_value::<InterestComparison>(result.clone()) {
        write_simple(&mut out, &cmp.simple);
        out.push('\n');
        write_compound(&mut out, &cmp.compound);
        out.push('\n');
        write_comparison(&mut out, &cmp);
    } else if let Ok(compound) = serde_json::from_value::<CompoundInterestReport>(result.clone()) {
        write_compound(&mut out, &compound);
    } else if let Ok(simple) = serde_json::from_value::<SimpleInterestReport>(result.clone()) {
        write_simple(&mut out, &simple);
    } else {
        return None;
    }

    write_warnings(&mut out, value);
    Some(out)
}

fn write_simple(out: &mut String, r: &SimpleInterestReport) {
    let _ = writeln!(out, "--- 1. SIMPLE INTEREST (I) ---");
    write_terms(out, r.principal, r.rate, r.time);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Simple Interest: {}", format_currency(r.interest));
    let _ = writeln!(out, "Total Amount: {}", format_currency(r.total_amount));
}

fn write_compound(out: &mut String, r: &CompoundInterestReport) {
    let _ = writeln!(out, "--- 2. COMPOUND INTEREST (CI) ---");
    write_terms(out, r.principal, r.rate, r.time);
    if Compounding::from_periods(r.compounds_per_year).is_some() {
        let _ = writeln!(
            out,
            "Compounded (N): {} times per year ({})",
            r.compounds_per_year, r.frequency_label
        );
    } else {
        let _ = writeln!(out, "Compounded (N): {}", r.frequency_label);
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Compound Interest: {}", format_currency(r.interest));
    let _ = writeln!(out, "Total Amount: {}", format_currency(r.total_amount));
}

fn write_terms(out: &mut String, principal: Decimal, rate: f64, time: f64) {
    let _ = writeln!(out, "Principal (P): {}", format_currency(principal));
    let _ = writeln!(out, "Rate (R): {}%", rate);
    let _ = writeln!(out, "Time (T): {} years", time);
}

fn write_comparison(out: &mut String, cmp: &InterestComparison) {
    let _ = writeln!(out, "--- COMPARISON ---");
    let _ = writeln!(out, "Simple Interest (Total): {}", format_currency(cmp.simple.total_amount));
    let _ = writeln!(out, "Compound Interest (Total): {}", format_currency(cmp.compound.total_amount));
    let _ = writeln!(out, "Difference: {}", format_currency(cmp.difference));
}

fn write_warnings(out: &mut String, envelope: &Value) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            let _ = writeln!(out, "\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                let _ = writeln!(out, "  - {}", w);
            }
        }
    }
}

/// `$` amount with thousands separators and two decimals, e.g. `-$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2).abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}
