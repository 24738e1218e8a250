//! Slash-delimited document paths.
//!
//! A path addresses a location inside a value tree: `/users/0/name` walks
//! into the `users` member, then element `0`, then member `name`. The empty
//! string addresses the root.
//!
//! Segments are taken verbatim. There is no `~0`/`~1` escaping, so an object
//! key containing `/` cannot be addressed.
//!
//! # Example
//!
//! ```
//! use jsonpatch_path::{format_path, parse_path};
//!
//! let path = parse_path("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_path(&path), "/foo/bar");
//!
//! assert!(parse_path("foo/bar").is_err());
//! ```

pub mod util;
pub mod validate;

pub use util::{is_integer, parse_index};
pub use validate::{validate_path, PathError};

/// One segment of a path: an object key or a decimal sequence index.
pub type PathStep = String;

/// A parsed path. The empty vector is the document root.
pub type Path = Vec<PathStep>;

/// The character separating path segments.
pub const SEPARATOR: char = '/';

/// Parse a path string into its segments.
///
/// - `""` is the root and parses to an empty vector.
/// - `"/"` is the empty key directly under the root.
/// - Anything else must start with `/`.
///
/// # Example
///
/// ```
/// use jsonpatch_path::parse_path;
///
/// assert_eq!(parse_path("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_path("/").unwrap(), vec![""]);
/// assert_eq!(parse_path("/a//b").unwrap(), vec!["a", "", "b"]);
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    validate_path(path)?;
    if path.is_empty() {
        return Ok(Vec::new());
    }
    Ok(path[1..].split(SEPARATOR).map(str::to_string).collect())
}

/// Format path segments back into a path string.
///
/// Returns an empty string for the root.
///
/// # Example
///
/// ```
/// use jsonpatch_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["foo".to_string()]), "/foo");
/// assert_eq!(format_path(&["a".to_string(), "0".to_string()]), "/a/0");
/// ```
pub fn format_path(path: &[String]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 1).sum());
    for step in path {
        out.push(SEPARATOR);
        out.push_str(step);
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Split a path into its parent path and last segment.
///
/// Returns `None` for the root.
pub fn split_last(path: &[String]) -> Option<(&[String], &str)> {
    path.split_last().map(|(last, init)| (init, last.as_str()))
}
