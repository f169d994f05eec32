//! Test fixtures and builders

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

use super::git::{create_named_repos, create_test_commit, setup_git_repo};

/// A scratch working directory with automatic cleanup
pub struct Workspace {
    pub temp_dir: TempDir,
}

impl Workspace {
    /// An empty workspace directory, not itself a repository
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// A workspace holding one committed repository per name
    pub fn with_repos(names: &[&str]) -> Result<Self> {
        let workspace = Self::new()?;
        create_named_repos(workspace.path(), names)?;
        Ok(workspace)
    }

    /// Get the path to the workspace
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a `.mgit` manifest listing the given directories
    pub fn write_manifest(&self, entries: &[&str]) -> Result<()> {
        let mut content = entries.join("\n");
        content.push('\n');
        std::fs::write(self.path().join(".mgit"), content)?;
        Ok(())
    }
}

/// Builder for a single repository living in its own temp directory
pub struct TestRepoBuilder {
    commits: Vec<String>,
}

impl TestRepoBuilder {
    pub fn new() -> Self {
        Self {
            commits: vec!["Initial commit".to_string()],
        }
    }

    /// Replace the commit history with the given subjects, oldest first
    pub fn with_commits(mut self, subjects: &[&str]) -> Self {
        self.commits = subjects.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Result<TempDir> {
        let temp_dir = TempDir::new()?;
        setup_git_repo(temp_dir.path())?;

        for (i, subject) in self.commits.iter().enumerate() {
            create_test_commit(
                temp_dir.path(),
                "CHANGELOG.md",
                &format!("revision {i}\n"),
                subject,
            )?;
        }

        Ok(temp_dir)
    }
}
