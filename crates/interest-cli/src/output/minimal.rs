use serde_json::Value;

use super::{format_scalar, result_of};

/// Key answer fields, most specific first.
const PRIORITY_KEYS: [&str; 3] = ["difference", "total_amount", "interest"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result_obj = result_of(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    return format_scalar(val);
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}
