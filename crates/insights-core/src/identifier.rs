//! Identifier comparison for trait nodes.
//!
//! Node ids come from JSON and may be strings or numbers depending on the
//! service version. Both sides are compared as canonical strings, with a
//! numeric fallback so `5`, `"5"` and `"5.0"` all refer to the same node.

use serde_json::Value;

/// Returns `true` when a node's `id` field refers to `target`.
///
/// - strings and numbers match when their text is equal, or when both sides
///   are numeric and have the same value (`"5"`, `5` and `"5.0"` are one id)
/// - `true` canonicalizes to `"1"` and `false` to `""`
/// - null, objects and arrays never match
#[must_use]
pub fn id_matches(field: &Value, target: &str) -> bool {
    match field {
        Value::String(s) => s == target || numeric_eq(numeric(s), target),
        Value::Number(n) => n.to_string() == target || numeric_eq(n.as_f64(), target),
        Value::Bool(b) => target == if *b { "1" } else { "" },
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Finite number parsed from `s`, ignoring surrounding whitespace.
fn numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[allow(clippy::float_cmp)]
fn numeric_eq(lhs: Option<f64>, target: &str) -> bool {
    matches!((lhs, numeric(target)), (Some(l), Some(r)) if l == r)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_ids_compare_verbatim() {
        assert!(id_matches(&json!("big5_openness"), "big5_openness"));
        assert!(!id_matches(&json!("big5_openness"), "Big5_Openness"));
    }

    #[test]
    fn numeric_id_matches_string_target() {
        assert!(id_matches(&json!(5), "5"));
        assert!(id_matches(&json!(5), "5.0"));
        assert!(id_matches(&json!(2.5), "2.5"));
        assert!(!id_matches(&json!(5), "6"));
    }

    #[test]
    fn non_numeric_target_never_matches_number() {
        assert!(!id_matches(&json!(5), "five"));
        assert!(!id_matches(&json!(0), ""));
    }

    #[test]
    fn numeric_string_ids_compare_by_value() {
        assert!(id_matches(&json!("5"), "5.0"));
        assert!(id_matches(&json!("5.0"), "5"));
        assert!(id_matches(&json!(" 7"), "7"));
        assert!(id_matches(&json!(7), "7.0"));
        assert!(!id_matches(&json!("5"), "6"));
    }

    #[test]
    fn non_finite_strings_are_not_numeric() {
        assert!(!id_matches(&json!("inf"), "infinity"));
        assert!(!id_matches(&json!("NaN"), "nan"));
        assert!(id_matches(&json!("NaN"), "NaN"));
    }

    #[test]
    fn bool_ids_use_canonical_strings() {
        assert!(id_matches(&json!(true), "1"));
        assert!(id_matches(&json!(false), ""));
        assert!(!id_matches(&json!(true), "true"));
    }

    #[test]
    fn null_and_containers_never_match() {
        assert!(!id_matches(&Value::Null, ""));
        assert!(!id_matches(&json!([]), ""));
        assert!(!id_matches(&json!({}), ""));
    }
}
