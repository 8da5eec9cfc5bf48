//! The primitives applied to dynamic JSON data.
//!
//! A `serde_json::Value` is a [`Collection`] of either shape: arrays behave
//! as sequences and objects as mappings. Scalars and `null` normalize to an
//! empty view rather than failing. Object order is the map's own order
//! (sorted keys, or insertion order with serde_json's `preserve_order`).
//!
//! The sequence-only and mapping-only operations have strict wrappers here
//! that check the shape first and report a mismatch as an [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use collection_kit::{json, map};
//! use serde_json::json;
//!
//! let doc = json!({"a": 1, "b": 2});
//! assert_eq!(map(&doc, |v| v.as_i64()), vec![Some(1), Some(2)]);
//! assert_eq!(json::keys(&doc)?, vec!["a", "b"]);
//! ```

use serde_json::{Map, Value};

use crate::collection::{Collection, Mapping};
use crate::error::{Error, Result};
use crate::logging::debug;
use crate::sequence::{self, flatten::Nestable};

impl Collection for Value {
    type Item = Value;

    fn normalize(&self) -> Vec<&Value> {
        match self {
            Value::Array(items) => items.normalize(),
            Value::Object(map) => map.normalize(),
            _ => {
                debug!(kind = kind_name(self), "scalar normalized to an empty view");
                Vec::new()
            }
        }
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn normalize(&self) -> Vec<&Value> {
        self.values().collect()
    }
}

impl Mapping for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn entries(&self) -> Vec<(&String, &Value)> {
        self.iter().collect()
    }
}

impl Nestable for Value {
    fn as_nested(&self) -> Option<&[Value]> {
        self.as_array().map(Vec::as_slice)
    }
}

/// Name of a JSON value's kind, as used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow the elements of a JSON array.
pub fn as_sequence(value: &Value) -> Result<&[Value]> {
    value.as_array().map(Vec::as_slice).ok_or(Error::NotASequence {
        found: kind_name(value),
    })
}

/// Borrow the entries of a JSON object.
pub fn as_mapping(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or(Error::NotAMapping {
        found: kind_name(value),
    })
}

/// [`sequence::first_n`] for a JSON array.
pub fn first_n(value: &Value, n: isize) -> Result<&[Value]> {
    Ok(sequence::first_n(as_sequence(value)?, n))
}

/// [`sequence::last_n`] for a JSON array.
pub fn last_n(value: &Value, n: isize) -> Result<&[Value]> {
    Ok(sequence::last_n(as_sequence(value)?, n))
}

/// [`sequence::sort_by`] for a JSON array.
pub fn sort_by<K, F>(value: &Value, key: F) -> Result<Vec<&Value>>
where
    K: PartialOrd,
    F: FnMut(&Value) -> K,
{
    Ok(sequence::sort_by(as_sequence(value)?, key))
}

/// [`flatten`](crate::flatten) for a JSON array, returning a new array value.
pub fn flatten(value: &Value, shallow: bool) -> Result<Value> {
    Ok(Value::Array(sequence::flatten::flatten(
        as_sequence(value)?,
        shallow,
    )))
}

/// Keys of a JSON object.
pub fn keys(value: &Value) -> Result<Vec<&String>> {
    Ok(crate::mapping::keys(as_mapping(value)?))
}

/// Values of a JSON object, in key order.
pub fn values(value: &Value) -> Result<Vec<&Value>> {
    Ok(crate::mapping::values(as_mapping(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_shapes() {
        assert_eq!(json!([1, 2]).normalize(), vec![&json!(1), &json!(2)]);
        assert_eq!(json!({"a": true}).normalize(), vec![&json!(true)]);
        assert!(json!("text").normalize().is_empty());
        assert!(Value::Null.normalize().is_empty());
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(
            as_sequence(&json!({"a": 1})),
            Err(Error::NotASequence { found: "object" })
        );
        assert_eq!(
            as_mapping(&json!([1])),
            Err(Error::NotAMapping { found: "array" })
        );
        assert!(first_n(&json!(3), 1).is_err_and(|e| e.found() == "number"));
    }

    #[test]
    fn test_flatten_arrays() {
        let nested = json!([1, [2, [3, 4]], 5]);
        assert_eq!(flatten(&nested, true), Ok(json!([1, 2, [3, 4], 5])));
        assert_eq!(flatten(&nested, false), Ok(json!([1, 2, 3, 4, 5])));
    }

    #[test]
    fn test_objects_are_leaves_when_flattening() {
        let nested = json!([{"a": [1]}, [2]]);
        assert_eq!(flatten(&nested, false), Ok(json!([{"a": [1]}, 2])));
    }

    #[test]
    fn test_keys_and_values() {
        let doc = json!({"b": 2, "a": 1});
        let keys = keys(&doc).unwrap_or_default();
        let values = values(&doc).unwrap_or_default();
        assert_eq!(keys.len(), 2);
        for (key, value) in keys.iter().zip(&values) {
            assert_eq!(doc.get(key.as_str()), Some(*value));
        }
    }
}
