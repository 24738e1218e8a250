//! The patch container: an ordered list of operations.

use std::fmt;
use std::str::FromStr;

use jsonpatch_path::format_path;
use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::{from_json_patch, to_json_patch};
use crate::error::PatchError;
use crate::op::Operation;

/// Options for [`Patch::apply_with`].
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// If true, operations run against a copy of the document and the copy
    /// replaces it only once every operation succeeded. If false, a failing
    /// operation leaves the effect of the operations before it in place.
    pub atomic: bool,
}

/// An ordered sequence of operations.
///
/// Operations apply strictly in order, each one against the document as
/// left by the previous ones.
///
/// ```
/// use jsonpatch::Patch;
/// use serde_json::json;
///
/// let patch = Patch::from_json(&json!([
///     {"add": "/foo", "value": "bar"},
///     {"add": "/baz", "value": [1, 2, 3]},
///     {"remove": "/baz/1"},
///     {"test": "/baz", "value": [1, 3]},
///     {"replace": "/baz/0", "value": 42},
///     {"remove": "/baz/1"},
/// ])).unwrap();
///
/// let mut doc = json!({});
/// patch.apply(&mut doc).unwrap();
/// assert_eq!(doc, json!({"foo": "bar", "baz": [42]}));
/// ```
///
/// Two patches are equal when their operations are; the source they were
/// decoded from does not take part.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    ops: Vec<Operation>,
    /// Operation list this patch was decoded from, members the decoder
    /// ignores included.
    source: Option<Value>,
}

impl Patch {
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops, source: None }
    }

    /// Decode a patch from its operation-list form.
    ///
    /// Every operation is decoded up front, so a malformed operation is
    /// reported before anything is applied. The input is kept and
    /// [`Patch::to_json`] returns it unchanged.
    pub fn from_json(value: &Value) -> Result<Self, PatchError> {
        let ops = from_json_patch(value)?;
        Ok(Self {
            ops,
            source: Some(value.clone()),
        })
    }

    /// Parse a patch from JSON text.
    pub fn from_string(text: &str) -> Result<Self, PatchError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// The operation-list form: the decoded source when there is one,
    /// otherwise the canonical encoding of the operations.
    pub fn to_json(&self) -> Value {
        match &self.source {
            Some(source) => source.clone(),
            None => to_json_patch(&self.ops),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.ops
    }

    /// Apply the patch to `doc` in place and hand the same document back.
    ///
    /// The first failing operation aborts the patch. Operations applied
    /// before it are not rolled back; use [`Patch::apply_with`] with
    /// [`ApplyOptions::atomic`] when that matters.
    pub fn apply<'a>(&self, doc: &'a mut Value) -> Result<&'a mut Value, PatchError> {
        debug!(ops = self.ops.len(), "applying patch");
        for (index, op) in self.ops.iter().enumerate() {
            trace!(index, op = op.name(), path = %format_path(op.path()), "applying operation");
            if let Err(err) = op.apply(doc) {
                debug!(index, op = op.name(), error = %err, "patch aborted");
                return Err(err);
            }
        }
        Ok(doc)
    }

    /// Apply the patch with explicit options.
    pub fn apply_with<'a>(
        &self,
        doc: &'a mut Value,
        options: &ApplyOptions,
    ) -> Result<&'a mut Value, PatchError> {
        if !options.atomic {
            return self.apply(doc);
        }
        let mut working = doc.clone();
        self.apply(&mut working)?;
        *doc = working;
        Ok(doc)
    }
}

impl PartialEq for Patch {
    fn eq(&self, other: &Self) -> bool {
        self.ops == other.ops
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl FromStr for Patch {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Vec<Operation>> for Patch {
    fn from(ops: Vec<Operation>) -> Self {
        Self::new(ops)
    }
}

impl FromIterator<Operation> for Patch {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for Patch {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

/// Decode `patch` and apply it to `doc`, returning the same document.
///
/// ```
/// use jsonpatch::apply_patch;
/// use serde_json::json;
///
/// let mut doc = json!({"foo": "bar"});
/// let out = apply_patch(&mut doc, &json!([{"add": "/baz", "value": "qux"}])).unwrap();
/// assert_eq!(*out, json!({"foo": "bar", "baz": "qux"}));
/// ```
pub fn apply_patch<'a>(doc: &'a mut Value, patch: &Value) -> Result<&'a mut Value, PatchError> {
    Patch::from_json(patch)?.apply(doc)
}
