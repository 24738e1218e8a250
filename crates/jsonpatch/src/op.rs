//! The five patch operations and their effect on a document.

use jsonpatch_path::{format_path, is_root, Path};
use serde_json::Value;

use crate::codec;
use crate::error::PatchError;
use crate::locate::{locate, Target};
use crate::value::deep_equal;

// ── Action ────────────────────────────────────────────────────────────────

/// The kind of an operation, named by its action key in the source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Remove,
    Replace,
    Move,
    Test,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Add,
        Action::Remove,
        Action::Replace,
        Action::Move,
        Action::Test,
    ];

    /// The action key as it appears in an operation object.
    pub fn key(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Replace => "replace",
            Action::Move => "move",
            Action::Test => "test",
        }
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// A single patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Move { from: Path, to: Path },
    Test { path: Path, value: Value },
}

impl Operation {
    pub fn action(&self) -> Action {
        match self {
            Operation::Add { .. } => Action::Add,
            Operation::Remove { .. } => Action::Remove,
            Operation::Replace { .. } => Action::Replace,
            Operation::Move { .. } => Action::Move,
            Operation::Test { .. } => Action::Test,
        }
    }

    pub fn name(&self) -> &'static str {
        self.action().key()
    }

    /// The path stored under the action key. For `move` this is the source.
    pub fn path(&self) -> &Path {
        match self {
            Operation::Add { path, .. }
            | Operation::Remove { path }
            | Operation::Replace { path, .. }
            | Operation::Test { path, .. } => path,
            Operation::Move { from, .. } => from,
        }
    }

    /// Decode an operation object such as `{"add": "/a", "value": 1}`.
    pub fn from_json(value: &Value) -> Result<Operation, PatchError> {
        codec::from_json(value)
    }

    pub fn to_json(&self) -> Value {
        codec::to_json(self)
    }

    /// Apply this operation to `doc` in place.
    ///
    /// On error `doc` is unchanged, except for `move`, whose source stays
    /// removed when the destination can't be added.
    pub fn apply(&self, doc: &mut Value) -> Result<(), PatchError> {
        match self {
            Operation::Add { path, value } => add(doc, path, value.clone()),
            Operation::Remove { path } => remove(doc, path).map(drop),
            Operation::Replace { path, value } => replace(doc, path, value.clone()),
            Operation::Move { from, to } => {
                let value = remove(doc, from)?;
                add(doc, to, value)
            }
            Operation::Test { path, value } => test(doc, path, value),
        }
    }
}

// ── Applicators ───────────────────────────────────────────────────────────

fn add(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    match locate(doc, path, false)? {
        Target::Element { list, index } => {
            if index > list.len() {
                return Err(PatchError::conflict(format!(
                    "can't insert outside of sequence at '{}'",
                    format_path(path)
                )));
            }
            list.insert(index, value);
        }
        Target::Member { map, key } => {
            if map.contains_key(&key) {
                return Err(PatchError::conflict(format!("object '{key}' already exists")));
            }
            map.insert(key, value);
        }
    }
    Ok(())
}

fn remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    let removed = match locate(doc, path, true)? {
        Target::Element { list, index } => (index < list.len()).then(|| list.remove(index)),
        Target::Member { map, key } => map.shift_remove(&key),
    };
    removed.ok_or_else(|| PatchError::conflict(format!("can't remove missing '{}'", format_path(path))))
}

fn replace(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if is_root(path) {
        *doc = value;
        return Ok(());
    }
    let slot = locate(doc, path, true)?.into_value().ok_or_else(|| {
        PatchError::conflict(format!("can't replace non-existent '{}'", format_path(path)))
    })?;
    *slot = value;
    Ok(())
}

fn test(doc: &mut Value, path: &[String], expected: &Value) -> Result<(), PatchError> {
    let target;
    let actual: &Value = if is_root(path) {
        doc
    } else {
        target = locate(doc, path, true)?;
        target
            .get()
            .ok_or_else(|| PatchError::conflict(format!("nothing to test at '{}'", format_path(path))))?
    };
    if deep_equal(actual, expected) {
        return Ok(());
    }
    Err(PatchError::TestFailed {
        path: format_path(path),
        expected: expected.clone(),
        actual: actual.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> Vec<String> {
        jsonpatch_path::parse_path(s).unwrap()
    }

    #[test]
    fn add_to_object() {
        let mut doc = json!({"foo": "bar"});
        Operation::Add { path: path("/baz"), value: json!("qux") }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!({"foo": "bar", "baz": "qux"}));
    }

    #[test]
    fn add_existing_key_conflicts() {
        let mut doc = json!({"foo": "bar"});
        let err = Operation::Add { path: path("/foo"), value: json!(1) }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(doc, json!({"foo": "bar"}));
    }

    #[test]
    fn add_inserts_into_sequence() {
        let mut doc = json!([1, 2, 3]);
        Operation::Add { path: path("/1"), value: json!(9) }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!([1, 9, 2, 3]));
    }

    #[test]
    fn add_appends_at_length() {
        let mut doc = json!([1]);
        Operation::Add { path: path("/1"), value: json!(2) }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn add_past_length_conflicts() {
        let mut doc = json!([1]);
        let err = Operation::Add { path: path("/2"), value: json!(2) }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn add_into_scalar_conflicts() {
        let mut doc = json!({"n": 1});
        let err = Operation::Add { path: path("/n/x"), value: json!(2) }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn add_at_root_conflicts() {
        let mut doc = json!({});
        let err = Operation::Add { path: vec![], value: json!(2) }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn remove_from_sequence() {
        let mut doc = json!([1, 9, 2, 3]);
        Operation::Remove { path: path("/1") }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn remove_missing_conflicts() {
        let mut doc = json!({"a": 1});
        assert!(Operation::Remove { path: path("/b") }.apply(&mut doc).unwrap_err().is_conflict());
        assert!(Operation::Remove { path: vec![] }.apply(&mut doc).unwrap_err().is_conflict());
    }

    #[test]
    fn remove_keeps_member_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        Operation::Remove { path: path("/a") }.apply(&mut doc).unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn replace_member_and_element() {
        let mut doc = json!({"a": [1, 2]});
        Operation::Replace { path: path("/a/1"), value: json!(42) }.apply(&mut doc).unwrap();
        Operation::Replace { path: path("/a/0"), value: json!("x") }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!({"a": ["x", 42]}));
    }

    #[test]
    fn replace_requires_existing_target() {
        let mut doc = json!({"a": [1, 2]});
        for p in ["/b", "/a/2", "/a/0/x"] {
            let err = Operation::Replace { path: path(p), value: json!(0) }.apply(&mut doc).unwrap_err();
            assert!(err.is_conflict(), "{p}");
        }
    }

    #[test]
    fn replace_root() {
        let mut doc = json!({"a": 1});
        Operation::Replace { path: vec![], value: json!([true]) }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!([true]));
    }

    #[test]
    fn move_member() {
        let mut doc = json!({"baz": 1, "other": 2});
        Operation::Move { from: path("/baz"), to: path("/qux") }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!({"other": 2, "qux": 1}));
    }

    #[test]
    fn move_resolves_destination_after_removal() {
        let mut doc = json!([0, 1, 2, 3]);
        Operation::Move { from: path("/0"), to: path("/3") }.apply(&mut doc).unwrap();
        assert_eq!(doc, json!([1, 2, 3, 0]));
    }

    #[test]
    fn move_failure_keeps_source_removed() {
        let mut doc = json!({"a": 1, "b": 2});
        let err = Operation::Move { from: path("/a"), to: path("/b") }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(doc, json!({"b": 2}));
    }

    #[test]
    fn move_missing_source_conflicts() {
        let mut doc = json!({"b": 2});
        let err = Operation::Move { from: path("/a"), to: path("/c") }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(doc, json!({"b": 2}));
    }

    #[test]
    fn test_pass_and_fail() {
        let mut doc = json!({"foo": "bar"});
        Operation::Test { path: path("/foo"), value: json!("bar") }.apply(&mut doc).unwrap();
        let err = Operation::Test { path: path("/foo"), value: json!("qux") }.apply(&mut doc).unwrap_err();
        match err {
            PatchError::TestFailed { path, expected, actual } => {
                assert_eq!(path, "/foo");
                assert_eq!(expected, json!("qux"));
                assert_eq!(actual, json!("bar"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(doc, json!({"foo": "bar"}));
    }

    #[test]
    fn test_compares_structurally() {
        let mut doc = json!({"o": {"x": [1, {"y": null}], "z": true}});
        let expected = json!({"z": true, "x": [1, {"y": null}]});
        Operation::Test { path: path("/o"), value: expected }.apply(&mut doc).unwrap();
    }

    #[test]
    fn test_compares_numbers_by_value() {
        let mut doc = json!({"n": 1, "f": [2.5, 3.0]});
        Operation::Test { path: path("/n"), value: json!(1.0) }.apply(&mut doc).unwrap();
        Operation::Test { path: path("/f"), value: json!([2.5, 3]) }.apply(&mut doc).unwrap();
        let err = Operation::Test { path: path("/n"), value: json!(1.5) }.apply(&mut doc).unwrap_err();
        assert!(err.is_test_failure());
    }

    #[test]
    fn test_missing_path_conflicts() {
        let mut doc = json!({});
        let err = Operation::Test { path: path("/nope"), value: json!(null) }.apply(&mut doc).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_root() {
        let mut doc = json!([1]);
        Operation::Test { path: vec![], value: json!([1]) }.apply(&mut doc).unwrap();
        assert!(Operation::Test { path: vec![], value: json!([]) }.apply(&mut doc).unwrap_err().is_test_failure());
    }

    #[test]
    fn names_and_paths() {
        let op = Operation::Move { from: path("/a"), to: path("/b") };
        assert_eq!(op.name(), "move");
        assert_eq!(op.path(), &path("/a"));
        assert_eq!(Action::ALL.map(|a| a.key()), ["add", "remove", "replace", "move", "test"]);
    }
}
