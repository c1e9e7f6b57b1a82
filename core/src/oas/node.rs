#![deny(missing_docs)]

//! # Raw Node Accessors
//!
//! The decoded document is kept as a `serde_json::Value` tree (object / array / string /
//! number / bool / null). Every read goes through the small set of pure accessors below,
//! which return `None` (or an empty slice) instead of failing when a field is missing
//! or has the wrong shape.

use serde_json::{Map, Number, Value};

/// Returns the named field of an object node.
pub fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.as_object()?.get(key)
}

/// Returns the named field when it is a string.
pub fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    field(node, key)?.as_str()
}

/// Returns an owned copy of a string field.
pub fn string_field(node: &Value, key: &str) -> Option<String> {
    str_field(node, key).map(str::to_owned)
}

/// Returns a string or numeric field rendered as text.
///
/// YAML documents often carry `version: 1.0` unquoted.
pub fn scalar_text(node: &Value, key: &str) -> Option<String> {
    match field(node, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Returns the named field when it is a boolean.
pub fn bool_field(node: &Value, key: &str) -> Option<bool> {
    field(node, key)?.as_bool()
}

/// Returns the named field when it is a number.
pub fn number_field(node: &Value, key: &str) -> Option<Number> {
    match field(node, key)? {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Returns the named field when it is an object.
pub fn object_field<'a>(node: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    field(node, key)?.as_object()
}

/// Returns the named field as a slice, empty when missing or not an array.
pub fn array_field<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    field(node, key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Collects the string entries of an array field. Non-string entries are skipped.
pub fn string_list(node: &Value, key: &str) -> Option<Vec<String>> {
    let items = field(node, key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
    )
}

/// Returns the `$ref` pointer carried by a node, if any.
pub fn ref_pointer(node: &Value) -> Option<&str> {
    str_field(node, "$ref")
}
