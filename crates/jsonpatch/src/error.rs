//! Errors raised while decoding or applying a patch.

use jsonpatch_path::PathError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    /// The patch or one of its operations has the wrong shape.
    #[error("invalid operation: {0}")]
    Malformed(String),
    /// A structural precondition of an operation does not hold.
    #[error("conflict: {0}")]
    Conflict(String),
    /// A `test` operation found a different value.
    #[error("test failed at '{path}': expected {expected}, found {actual}")]
    TestFailed {
        path: String,
        expected: Value,
        actual: Value,
    },
    /// The patch text is not valid JSON.
    #[error("invalid patch text: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl PatchError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        PatchError::Malformed(msg.into())
    }

    pub(crate) fn conflict(msg: impl Into<String>) -> Self {
        PatchError::Conflict(msg.into())
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PatchError::Conflict(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, PatchError::Malformed(_))
    }

    pub fn is_test_failure(&self) -> bool {
        matches!(self, PatchError::TestFailed { .. })
    }
}

impl From<PathError> for PatchError {
    fn from(e: PathError) -> Self {
        PatchError::Malformed(e.to_string())
    }
}
