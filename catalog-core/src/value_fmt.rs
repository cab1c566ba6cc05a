//! Display formatting for free-form JSON property values.
//!
//! The tree view renders one node per object/array and one leaf line per
//! scalar. This module produces the text for both, so the formatting of
//! every JSON value kind stays testable without a UI:
//!
//! - object → `label { n }`
//! - array → `label [ n ]`
//! - string → `label: "text"`
//! - bool → `label: true` / `label: false`
//! - number → `label: 7` (integer) / `label: 2.5` (float)
//! - null → `label: null`

use serde_json::{Number, Value};

/// Returns `true` for values rendered as collapsible branches.
///
/// Objects and arrays are branches; every other value kind is a leaf.
pub fn is_branch(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Returns the display text for a tree node holding `value`.
///
/// Branch nodes show the child count; leaf nodes show a type-tagged
/// rendering of the scalar.
///
/// ### Parameters
/// - `label` - Key, array index, or root label to prefix the value with.
/// - `value` - The JSON value to format.
pub fn node_text(label: &str, value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{label} {{ {} }}", map.len()),
        Value::Array(items) => format!("{label} [ {} ]", items.len()),
        Value::String(s) => format!("{label}: \"{s}\""),
        Value::Bool(b) => format!("{label}: {b}"),
        Value::Number(n) => format!("{label}: {}", number_text(n)),
        Value::Null => format!("{label}: null"),
    }
}

/// Integers print without a decimal point; floats use the shortest
/// `Display` form (no trailing zeros).
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_nodes_show_entry_count() {
        let value = json!({ "a": 1, "b": 2, "c": 3 });
        assert_eq!(node_text("properties", &value), "properties { 3 }");
        assert!(is_branch(&value));
    }

    #[test]
    fn array_nodes_show_element_count() {
        let value = json!([10, 20]);
        assert_eq!(node_text("grades", &value), "grades [ 2 ]");
        assert!(is_branch(&value));
    }

    #[test]
    fn string_leaves_are_quoted() {
        let value = json!("carbon steel");
        assert_eq!(node_text("alloy", &value), "alloy: \"carbon steel\"");
        assert!(!is_branch(&value));
    }

    #[test]
    fn bool_leaves_print_true_or_false() {
        assert_eq!(node_text("magnetic", &json!(true)), "magnetic: true");
        assert_eq!(node_text("magnetic", &json!(false)), "magnetic: false");
    }

    #[test]
    fn integer_leaves_have_no_decimal_point() {
        assert_eq!(node_text("count", &json!(7)), "count: 7");
        assert_eq!(node_text("offset", &json!(-3)), "offset: -3");
        // u64 values beyond i64 range still print as integers.
        assert_eq!(
            node_text("big", &json!(u64::MAX)),
            format!("big: {}", u64::MAX)
        );
    }

    #[test]
    fn float_leaves_use_shortest_form() {
        assert_eq!(node_text("density", &json!(7.85)), "density: 7.85");
        // No trailing zeros on round floats.
        assert_eq!(node_text("half", &json!(0.5)), "half: 0.5");
    }

    #[test]
    fn null_leaves_print_null() {
        assert_eq!(node_text("notes", &json!(null)), "notes: null");
        assert!(!is_branch(&json!(null)));
    }

    #[test]
    fn empty_containers_show_zero_count() {
        assert_eq!(node_text("props", &json!({})), "props { 0 }");
        assert_eq!(node_text("tags", &json!([])), "tags [ 0 ]");
    }
}
