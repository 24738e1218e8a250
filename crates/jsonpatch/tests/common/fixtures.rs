use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use jsonpatch::PatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Malformed,
    Conflict,
    TestFailed,
}

impl ErrorKind {
    pub fn matches(&self, err: &PatchError) -> bool {
        match self {
            ErrorKind::Malformed => err.is_malformed(),
            ErrorKind::Conflict => err.is_conflict(),
            ErrorKind::TestFailed => err.is_test_failure(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyCase {
    pub name: String,
    pub doc: Value,
    pub patch: Value,
    /// Document after a successful apply.
    #[serde(default)]
    pub expected: Option<Value>,
    /// Kind of the error the apply must fail with.
    #[serde(default)]
    pub error: Option<ErrorKind>,
    /// Document after a failed apply; defaults to `doc`.
    #[serde(default)]
    pub after_error: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffCase {
    pub name: String,
    pub src: Value,
    pub dst: Value,
    /// Exact patch the differ is expected to emit, when pinned.
    #[serde(default)]
    pub patch: Option<Value>,
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read<T: for<'de> Deserialize<'de>>(file: &str) -> T {
    let path = fixtures_dir().join(file);
    let data = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path:?}: {e}"))
}

pub fn load_apply_cases() -> Vec<ApplyCase> {
    read("apply.json")
}

pub fn load_diff_cases() -> Vec<DiffCase> {
    read("diff.json")
}
