//! Node classification and comparison for the value tree.
//!
//! Documents are plain [`serde_json::Value`] trees. Objects and arrays are
//! containers; strings, numbers, booleans and null are opaque scalars.

use std::fmt;

use serde_json::{Number, Value};

/// The structural kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Object,
    Sequence,
    Scalar,
}

impl Kind {
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deep structural equality between two values.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Object members
/// compare regardless of order.
///
/// ```
/// use jsonpatch::value::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, a)| b.get(key).is_some_and(|b| deep_equal(a, b)))
        }
        _ => false,
    }
}

fn number_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}
