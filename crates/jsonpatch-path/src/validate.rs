//! Validation functions for paths.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("location must start with /, got '{0}'")]
    MissingRoot(String),
}

/// Validate a path string.
///
/// # Errors
///
/// Returns [`PathError::MissingRoot`] if the path is non-empty but doesn't
/// start with `/`.
///
/// # Example
///
/// ```
/// use jsonpatch_path::validate_path;
///
/// validate_path("").unwrap();
/// validate_path("/foo/bar").unwrap();
/// validate_path("foo").unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() || path.starts_with(crate::SEPARATOR) {
        Ok(())
    } else {
        Err(PathError::MissingRoot(path.to_string()))
    }
}
