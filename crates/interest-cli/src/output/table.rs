use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten, format_scalar, result_of};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

fn render_table(value: &Value) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten(result_of(value)) {
        builder.push_record([key, format_scalar(&val)]);
    }
    let mut rendered = Table::from(builder).to_string();

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            rendered.push_str("\n\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                rendered.push_str(&format!("\n  - {}", w));
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        rendered.push_str(&format!("\n\nMethodology: {}", meth));
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_lists_fields_warnings_and_methodology() {
        let value = json!({
            "result": { "interest": "-10.00", "total_amount": "490.00" },
            "methodology": "Simple Interest (I = P * R * T / 100)",
            "warnings": ["Negative rate (-2%) models depreciation, not interest"]
        });
        let rendered = render_table(&value);
        assert!(rendered.contains("total_amount"));
        assert!(rendered.contains("490.00"));
        assert!(rendered.contains("Warnings:\n  - Negative rate"));
        assert!(rendered.ends_with("Methodology: Simple Interest (I = P * R * T / 100)"));
    }
}
