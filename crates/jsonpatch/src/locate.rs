//! Path resolution into a value tree.
//!
//! [`locate`] walks every segment but the last, requiring each to exist, and
//! stops at the container that holds (or will hold) the final segment. The
//! caller receives that container together with the terminal key or index as
//! a [`Target`].

use jsonpatch_path::{parse_index, split_last};
use serde_json::{Map, Value};

use crate::error::PatchError;
use crate::value::Kind;

/// A resolved location: the parent container and the terminal key or index.
///
/// With `last_must_exist = false` the key/index may not be present yet; an
/// element index may even lie past the end of the sequence. Operations decide
/// what to do with such targets.
#[derive(Debug)]
pub enum Target<'a> {
    Member {
        map: &'a mut Map<String, Value>,
        key: String,
    },
    Element {
        list: &'a mut Vec<Value>,
        index: usize,
    },
}

impl<'a> Target<'a> {
    /// The value currently at the target, if any.
    pub fn get(&self) -> Option<&Value> {
        match self {
            Target::Member { map, key } => map.get(key),
            Target::Element { list, index } => list.get(*index),
        }
    }

    /// Consume the target, yielding the value currently at it.
    pub fn into_value(self) -> Option<&'a mut Value> {
        match self {
            Target::Member { map, key } => map.get_mut(&key),
            Target::Element { list, index } => list.get_mut(index),
        }
    }
}

/// Walk `path` through `root` and return the parent of its last segment.
///
/// Intermediate segments must always exist. The last one must exist only
/// when `last_must_exist` is set.
///
/// # Errors
///
/// [`PatchError::Conflict`] when a segment is missing, a sequence segment is
/// not a decimal index, a scalar is stepped into, or `path` is the root
/// (the root has no parent).
///
/// # Example
///
/// ```
/// use jsonpatch::{locate, Target};
/// use serde_json::json;
///
/// let mut doc = json!({"a": [1, 2]});
/// let path = vec!["a".to_string(), "2".to_string()];
///
/// match locate(&mut doc, &path, false).unwrap() {
///     Target::Element { list, index } => assert_eq!((list.len(), index), (2, 2)),
///     Target::Member { .. } => unreachable!(),
/// }
/// assert!(locate(&mut doc, &path, true).is_err());
/// ```
pub fn locate<'a>(
    root: &'a mut Value,
    path: &[String],
    last_must_exist: bool,
) -> Result<Target<'a>, PatchError> {
    let Some((init, last)) = split_last(path) else {
        return Err(PatchError::conflict("operation can't target the document root"));
    };
    let mut node = root;
    for step in init {
        node = descend(node, step)?;
    }
    terminal(node, last, last_must_exist)
}

// ── Steps ─────────────────────────────────────────────────────────────────

fn descend<'a>(node: &'a mut Value, step: &str) -> Result<&'a mut Value, PatchError> {
    match node {
        Value::Object(map) => map.get_mut(step).ok_or_else(|| not_found(step)),
        Value::Array(list) => {
            let index = sequence_index(step)?;
            list.get_mut(index).ok_or_else(|| not_found(step))
        }
        scalar => Err(into_scalar(scalar, step)),
    }
}

fn terminal<'a>(node: &'a mut Value, step: &str, must_exist: bool) -> Result<Target<'a>, PatchError> {
    match node {
        Value::Object(map) => {
            if must_exist && !map.contains_key(step) {
                return Err(not_found(step));
            }
            Ok(Target::Member { map, key: step.to_string() })
        }
        Value::Array(list) => {
            let index = sequence_index(step)?;
            if must_exist && index >= list.len() {
                return Err(not_found(step));
            }
            Ok(Target::Element { list, index })
        }
        scalar => Err(into_scalar(scalar, step)),
    }
}

fn sequence_index(step: &str) -> Result<usize, PatchError> {
    parse_index(step)
        .ok_or_else(|| PatchError::conflict(format!("'{step}' is not a valid sequence index")))
}

fn not_found(step: &str) -> PatchError {
    PatchError::conflict(format!("key {step} not found"))
}

fn into_scalar(node: &Value, step: &str) -> PatchError {
    PatchError::conflict(format!("can't step into {} with '{step}'", Kind::of(node)))
}
