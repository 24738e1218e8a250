//! Structural patches for JSON-like documents.
//!
//! A [`Patch`] is an ordered list of [`Operation`]s (`add`, `remove`,
//! `replace`, `move`, `test`) applied in place to a [`serde_json::Value`].
//! [`make_patch`] derives such a list from two documents.
//!
//! Operations are written as objects keyed by their action:
//!
//! ```
//! use jsonpatch::{apply_patch, make_patch};
//! use serde_json::json;
//!
//! let mut doc = json!({"baz": 1, "other": 2});
//! apply_patch(&mut doc, &json!([
//!     {"move": "/baz", "to": "/qux"},
//!     {"test": "/qux", "value": 1},
//! ])).unwrap();
//! assert_eq!(doc, json!({"other": 2, "qux": 1}));
//!
//! let patch = make_patch(&doc, &json!({"other": [2]}));
//! assert_eq!(patch.to_string(), r#"[{"replace":"/other","value":[2]},{"remove":"/qux"}]"#);
//! ```
//!
//! Paths are slash-delimited (see [`jsonpatch_path`]) and are not unescaped.
//! A failing operation aborts the patch and leaves the operations before it
//! applied, unless [`ApplyOptions::atomic`] is set.

pub mod codec;
pub mod diff;
pub mod error;
pub mod locate;
pub mod op;
pub mod patch;
pub mod value;

pub use diff::make_patch;
pub use error::PatchError;
pub use jsonpatch_path::{format_path, parse_path, Path};
pub use locate::{locate, Target};
pub use op::{Action, Operation};
pub use patch::{apply_patch, ApplyOptions, Patch};
pub use value::Kind;
