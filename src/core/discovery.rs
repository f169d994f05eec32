//! Repository discovery
//!
//! Exactly one strategy applies per run:
//! 1. the working directory is inside a repository: that repository alone
//! 2. a manifest file lists repository directories, one per line
//! 3. every immediate subdirectory holding a `.git` entry

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RidError;
use crate::git::git_dir;
use crate::utils::dir_name;

const GIT_DIR_NAME: &str = ".git";

/// Resolves the repositories to fingerprint, as seen from `cwd`
pub async fn find_repo_directories(cwd: &Path, manifest_name: &str) -> Result<Vec<PathBuf>> {
    let repos = match git_dir(cwd).await? {
        Some(git_dir) => vec![repo_root_from_git_dir(&git_dir)?],
        None => {
            let manifest = cwd.join(manifest_name);
            if manifest.is_file() {
                read_manifest(&manifest)?
            } else {
                find_repo_subdirectories(cwd)?
            }
        }
    };

    if repos.is_empty() {
        return Err(RidError::NoRepositories(cwd.to_path_buf()).into());
    }

    tracing::debug!("dir: {:?}", repos);
    Ok(repos)
}

/// Maps `git rev-parse --git-dir` output to the repository's work tree
pub fn repo_root_from_git_dir(git_dir: &str) -> Result<PathBuf, RidError> {
    if git_dir == GIT_DIR_NAME {
        Ok(PathBuf::from("."))
    } else {
        dir_name(git_dir).map(PathBuf::from)
    }
}

/// Reads a manifest: one repository path per line, blank lines ignored
pub fn read_manifest(path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Lists the immediate subdirectories of `dir` that are git repositories
/// Returns paths relative to `dir`, sorted by name
pub fn find_repo_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(true) // Skip .git itself and other dot directories
        .follow_links(true) // Symlinked checkouts count as repositories
        .max_depth(Some(1))
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to list directory {}", dir.display()))?;
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        // Submodules and worktrees expose a .git file rather than a directory
        if entry.path().join(GIT_DIR_NAME).exists() {
            repos.push(PathBuf::from(entry.file_name()));
        }
    }

    repos.sort();
    Ok(repos)
}
