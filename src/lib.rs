//! # goobits-rid
//!
//! `goobits-rid` shows a stable fingerprint for one or more git repositories:
//! a SHA-1 of their latest commits plus a random art picture drawn from the
//! same data. It powers the `rid` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: the enclosing repository, a `.mgit` manifest, or every
//!   repository one level below the working directory.
//! - **Order independence**: commit summaries are sorted before hashing, so
//!   discovery order never changes the fingerprint.
//! - **Display modes**: chunked digest, mirrored output, right alignment,
//!   first-digit highlighting and screen clearing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use goobits_rid::core::{compute_signature, digest_hex};
//! use goobits_rid::git::GitCli;
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repos = vec![PathBuf::from(".")];
//!     let signature = compute_signature(&repos, &GitCli::new(".")).await?;
//!     println!("{}", digest_hex(&signature));
//!     Ok(())
//! }
//! ```

pub mod art;
pub mod commands;
pub mod core;
pub mod error;
pub mod git;
pub mod render;
pub mod telemetry;
pub mod utils;
