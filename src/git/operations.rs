//! Git command execution

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::error::RidError;

// Git command arguments
const GIT_REV_PARSE_GIT_DIR_ARGS: &[&str] = &["rev-parse", "--git-dir"];
const GIT_LOG_LATEST_ARGS: &[&str] = &["log", "--no-decorate", "-1", "--oneline"];

/// Runs a git command in the specified directory
/// Returns (success, stdout, stderr)
///
/// stdout is returned untouched, trailing newline included; callers that
/// need a trimmed value trim it themselves. stderr is trimmed for messages.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(bool, String, String)> {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .await
        .with_context(|| format!("failed to spawn `git {}`", args.join(" ")))?;

    Ok((
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).trim().to_string(),
    ))
}

/// Returns the git dir reported by `git rev-parse --git-dir` in `path`,
/// or None when `path` is not inside a work tree
pub async fn git_dir(path: &Path) -> Result<Option<String>> {
    let (success, stdout, _) = run_git(path, GIT_REV_PARSE_GIT_DIR_ARGS).await?;
    if !success {
        return Ok(None);
    }
    Ok(stdout.lines().next().map(str::to_string))
}

/// Builds the argument list that reads the latest commit of `repo`
pub fn latest_summary_args(repo: &Path) -> Vec<String> {
    let mut args = vec![
        format!("--git-dir={}", repo.join(".git").display()),
        format!("--work-tree={}", repo.display()),
    ];
    args.extend(GIT_LOG_LATEST_ARGS.iter().map(|arg| arg.to_string()));
    args
}

/// Source of the "most recent state" string of a repository
#[async_trait]
pub trait CommitLog {
    /// Returns the latest one-line commit summary of `repo` exactly as git
    /// printed it, trailing newline included
    async fn latest_summary(&self, repo: &Path) -> Result<String>;
}

/// [`CommitLog`] backed by the `git` executable
#[derive(Clone, Debug)]
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    /// Runs git from `cwd`; relative repository paths resolve against it
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

#[async_trait]
impl CommitLog for GitCli {
    async fn latest_summary(&self, repo: &Path) -> Result<String> {
        let args = latest_summary_args(repo);
        let command = format!("git {}", args.join(" "));
        tracing::debug!("{command}");

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        match run_git(&self.cwd, &arg_refs).await? {
            (true, stdout, _) => Ok(stdout),
            (false, _, stderr) => Err(RidError::Git { command, stderr }.into()),
        }
    }
}
