//! Repository signature and digest
//!
//! The canonical signature is every repository's latest commit summary,
//! sorted and joined with newlines. Sorting makes it independent of the
//! order discovery returned the repositories in.

use anyhow::Result;
use sha1::{Digest, Sha1};
use std::path::PathBuf;

use crate::git::CommitLog;

/// Collects the latest state of every repository into the canonical signature
///
/// Repositories are read one after another. The first failure aborts the
/// whole computation; there is no partial signature.
pub async fn compute_signature<L>(repos: &[PathBuf], log: &L) -> Result<String>
where
    L: CommitLog + Sync + ?Sized,
{
    let mut summaries = Vec::with_capacity(repos.len());
    for repo in repos {
        summaries.push(log.latest_summary(repo).await?);
    }
    Ok(canonicalize(summaries))
}

/// Sorts the summaries byte-wise and joins them with `\n`
///
/// Summaries are used verbatim, trailing newlines included.
pub fn canonicalize(mut summaries: Vec<String>) -> String {
    summaries.sort();
    summaries.join("\n")
}

/// SHA-1 of the signature as 40 lowercase hex characters
pub fn digest_hex(signature: &str) -> String {
    hex::encode(Sha1::digest(signature.as_bytes()))
}
