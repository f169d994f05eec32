//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::{TestRepoBuilder, Workspace};
pub use self::git::{create_test_commit, is_git_available, latest_oneline, setup_git_repo};
