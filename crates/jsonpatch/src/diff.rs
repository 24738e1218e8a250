//! Patch generation from two documents.
//!
//! The comparison is greedy and positional: objects are compared key by key,
//! sequences index by index, and anything else that differs is replaced
//! wholesale. The result is correct but not minimal; an element inserted at
//! the front of a sequence shows up as a replace of every later position plus
//! an add at the end.

use serde_json::{Map, Value};
use tracing::debug;

use crate::op::Operation;
use crate::patch::Patch;
use crate::value::deep_equal;

/// Generate a patch that transforms `src` into `dst`.
///
/// Object members are visited in insertion order: removals and nested edits
/// follow the order of `src`, then additions follow the order of `dst`.
///
/// ```
/// use jsonpatch::make_patch;
/// use serde_json::json;
///
/// let mut src = json!({"foo": "bar", "numbers": [1, 3, 4, 8]});
/// let dst = json!({"baz": "qux", "numbers": [1, 4, 7]});
///
/// let patch = make_patch(&src, &dst);
/// patch.apply(&mut src).unwrap();
/// assert_eq!(src, dst);
/// ```
pub fn make_patch(src: &Value, dst: &Value) -> Patch {
    let mut ops = Vec::new();
    if !deep_equal(src, dst) {
        compare_values(&mut ops, &mut Vec::new(), src, dst);
    }
    debug!(ops = ops.len(), "generated patch");
    Patch::new(ops)
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn compare_values(ops: &mut Vec<Operation>, path: &mut Vec<String>, src: &Value, dst: &Value) {
    match (src, dst) {
        (Value::Object(s), Value::Object(d)) => compare_dict(ops, path, s, d),
        (Value::Array(s), Value::Array(d)) => compare_list(ops, path, s, d),
        _ => ops.push(Operation::Replace {
            path: path.clone(),
            value: dst.clone(),
        }),
    }
}

fn compare_dict(
    ops: &mut Vec<Operation>,
    path: &mut Vec<String>,
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    for (key, src_val) in src {
        path.push(key.clone());
        match dst.get(key) {
            None => ops.push(Operation::Remove { path: path.clone() }),
            Some(dst_val) if !deep_equal(dst_val, src_val) => compare_values(ops, path, src_val, dst_val),
            Some(_) => {}
        }
        path.pop();
    }
    for (key, dst_val) in dst {
        if src.contains_key(key) {
            continue;
        }
        path.push(key.clone());
        ops.push(Operation::Add {
            path: path.clone(),
            value: dst_val.clone(),
        });
        path.pop();
    }
}

fn compare_list(ops: &mut Vec<Operation>, path: &mut Vec<String>, src: &[Value], dst: &[Value]) {
    // Growth is appended lowest index first: an add past the current end is
    // a conflict. Everything else goes from the highest index down, so a
    // removal never shifts a position that is still to be visited.
    for (index, value) in dst.iter().enumerate().skip(src.len()) {
        path.push(index.to_string());
        ops.push(Operation::Add {
            path: path.clone(),
            value: value.clone(),
        });
        path.pop();
    }
    for index in (0..src.len()).rev() {
        path.push(index.to_string());
        match dst.get(index) {
            Some(dst_val) if !deep_equal(dst_val, &src[index]) => compare_values(ops, path, &src[index], dst_val),
            Some(_) => {}
            None => ops.push(Operation::Remove { path: path.clone() }),
        }
        path.pop();
    }
}
