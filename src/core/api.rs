//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Signature and digest computation
//! - Display options and the settings file
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{
    find_repo_directories, find_repo_subdirectories, read_manifest, repo_root_from_git_dir,
};

// Signature
pub use super::signature::{canonicalize, compute_signature, digest_hex};

// Options
pub use super::options::{DisplayOptions, Palette};

// Configuration
pub use super::config::Settings;
pub use super::config::{DEFAULT_CHUNK_SIZE, DIGEST_HEX_LEN, MANIFEST_FILENAME};
pub use super::config::{COLOR_BOLD_GREEN, COLOR_RESET};
