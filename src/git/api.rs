//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Raw command execution
//! - Locating the enclosing repository
//! - Reading the latest commit summary of a repository
//!
//! ## Example: Reading a repository's latest commit
//!
//! ```rust,no_run
//! use goobits_rid::git::{CommitLog, GitCli};
//! use std::path::Path;
//!
//! async fn latest(repo: &Path) -> anyhow::Result<String> {
//!     GitCli::new(".").latest_summary(repo).await
//! }
//! ```

pub use super::operations::{git_dir, latest_summary_args, run_git, CommitLog, GitCli};
