//! Path helpers

use crate::error::RidError;
use std::path::Path;

/// Returns the final component of `path`, used as the heading line
pub fn base_name(path: &Path) -> Result<String, RidError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| RidError::MalformedPath {
            path: path.display().to_string(),
            component: "basename",
        })
}

/// Returns everything before the last `/` in `path`
///
/// Works on the string form because the input is git's own `--git-dir`
/// output, which always uses `/` separators.
pub fn dir_name(path: &str) -> Result<&str, RidError> {
    match path.rfind('/') {
        Some(0) => Ok("/"),
        Some(idx) => Ok(&path[..idx]),
        None => Err(RidError::MalformedPath {
            path: path.to_string(),
            component: "dirname",
        }),
    }
}
