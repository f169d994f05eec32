//! Error taxonomy for a fingerprint run
//!
//! Every variant is fatal: the run stops at the first failure and `main`
//! reports it. A fingerprint computed from partial data would be wrong, so
//! nothing here is retried or downgraded to a warning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RidError {
    /// A git invocation exited non-zero
    #[error("`{command}` failed: {stderr}")]
    Git { command: String, stderr: String },

    /// A path had no usable basename or dirname
    #[error("could not get {component} from path '{path}'")]
    MalformedPath {
        path: String,
        component: &'static str,
    },

    /// Neither the enclosing repository, a manifest, nor any subdirectory produced a repo
    #[error("no git repositories found in {}", .0.display())]
    NoRepositories(PathBuf),

    /// The settings file exists but cannot be used
    #[error("invalid settings file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
