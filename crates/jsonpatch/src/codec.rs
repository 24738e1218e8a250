//! Conversion between operations and their source representation.
//!
//! An operation object carries exactly one action key (`add`, `remove`,
//! `replace`, `move`, `test`) whose value is the target path. `add`,
//! `replace` and `test` also carry `value`; `move` carries the destination
//! path under `to`. Unrecognised members are ignored.
//!
//! ```text
//! [
//!   {"add": "/baz", "value": "qux"},
//!   {"move": "/baz", "to": "/quux"},
//!   {"remove": "/foo"}
//! ]
//! ```

use jsonpatch_path::{format_path, parse_path, Path};
use serde_json::{Map, Value};

use crate::error::PatchError;
use crate::op::{Action, Operation};

/// Key holding the operand of `add`, `replace` and `test`.
pub const VALUE_KEY: &str = "value";
/// Key holding the destination path of `move`.
pub const TO_KEY: &str = "to";

// ── Decoding ──────────────────────────────────────────────────────────────

/// Decode a single operation object.
///
/// # Errors
///
/// [`PatchError::Malformed`] if `value` is not an object, holds zero or
/// several action keys, lacks a member its action needs, or a path is not a
/// string starting with `/`.
pub fn from_json(value: &Value) -> Result<Operation, PatchError> {
    let obj = value
        .as_object()
        .ok_or_else(|| PatchError::malformed(format!("operation must be an object, got {value}")))?;
    let action = action_of(obj)?;
    let path = decode_path(obj, action.key())?;
    let op = match action {
        Action::Add => Operation::Add { path, value: decode_value(obj, action)? },
        Action::Remove => Operation::Remove { path },
        Action::Replace => Operation::Replace { path, value: decode_value(obj, action)? },
        Action::Move => Operation::Move { from: path, to: decode_path(obj, TO_KEY)? },
        Action::Test => Operation::Test { path, value: decode_value(obj, action)? },
    };
    Ok(op)
}

/// Decode a whole operation list.
pub fn from_json_patch(value: &Value) -> Result<Vec<Operation>, PatchError> {
    let ops = value
        .as_array()
        .ok_or_else(|| PatchError::malformed(format!("patch must be an array of operations, got {value}")))?;
    ops.iter().map(from_json).collect()
}

fn action_of(obj: &Map<String, Value>) -> Result<Action, PatchError> {
    let mut present = Action::ALL.into_iter().filter(|a| obj.contains_key(a.key()));
    match (present.next(), present.next()) {
        (Some(action), None) => Ok(action),
        (None, _) => Err(PatchError::malformed(format!(
            "invalid operation '{}'",
            Value::Object(obj.clone())
        ))),
        (Some(first), Some(second)) => Err(PatchError::malformed(format!(
            "operation has more than one action key ('{}' and '{}')",
            first.key(),
            second.key()
        ))),
    }
}

fn decode_path(obj: &Map<String, Value>, key: &str) -> Result<Path, PatchError> {
    let raw = obj
        .get(key)
        .ok_or_else(|| PatchError::malformed(format!("missing '{key}' member")))?
        .as_str()
        .ok_or_else(|| PatchError::malformed(format!("'{key}' must be a path string")))?;
    Ok(parse_path(raw)?)
}

fn decode_value(obj: &Map<String, Value>, action: Action) -> Result<Value, PatchError> {
    obj.get(VALUE_KEY).cloned().ok_or_else(|| {
        PatchError::malformed(format!("'{}' operation requires a '{VALUE_KEY}' member", action.key()))
    })
}

// ── Encoding ──────────────────────────────────────────────────────────────

/// Encode an operation into its object form.
pub fn to_json(op: &Operation) -> Value {
    let mut m = Map::new();
    m.insert(op.name().into(), Value::String(format_path(op.path())));
    match op {
        Operation::Add { value, .. } | Operation::Replace { value, .. } | Operation::Test { value, .. } => {
            m.insert(VALUE_KEY.into(), value.clone());
        }
        Operation::Move { to, .. } => {
            m.insert(TO_KEY.into(), Value::String(format_path(to)));
        }
        Operation::Remove { .. } => {}
    }
    Value::Object(m)
}

/// Encode an operation list.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}
