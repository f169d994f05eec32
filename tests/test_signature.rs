//! Integration tests for signature and digest computation against real git

mod common;

use common::{create_test_commit, is_git_available, latest_oneline, Workspace};
use goobits_rid::core::{compute_signature, digest_hex};
use goobits_rid::error::RidError;
use goobits_rid::git::{CommitLog, GitCli};
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_latest_summary_matches_git_log() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::with_repos(&["core"]).expect("Failed to create repos");
    let git = GitCli::new(workspace.path());

    let summary = git
        .latest_summary(Path::new("core"))
        .await
        .expect("Reading the latest commit should succeed");

    assert!(summary.ends_with(" Initial commit of core\n"));
    assert_eq!(summary, latest_oneline(&workspace.path().join("core")).unwrap());
}

#[tokio::test]
async fn test_latest_summary_follows_new_commits() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::with_repos(&["core"]).expect("Failed to create repos");
    let git = GitCli::new(workspace.path());
    let before = git.latest_summary(Path::new("core")).await.unwrap();

    create_test_commit(&workspace.path().join("core"), "lib.rs", "fn main() {}", "Add lib")
        .expect("Failed to commit");
    let after = git.latest_summary(Path::new("core")).await.unwrap();

    assert_ne!(before, after);
    assert!(after.ends_with(" Add lib\n"));
}

#[tokio::test]
async fn test_signature_independent_of_order() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::with_repos(&["api", "web", "cli"]).expect("Failed to create repos");
    let git = GitCli::new(workspace.path());

    let forward: Vec<PathBuf> = ["api", "web", "cli"].iter().map(PathBuf::from).collect();
    let backward: Vec<PathBuf> = forward.iter().rev().cloned().collect();

    let first = compute_signature(&forward, &git).await.unwrap();
    let second = compute_signature(&backward, &git).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(digest_hex(&first), digest_hex(&second));

    let mut expected: Vec<String> = forward
        .iter()
        .map(|repo| latest_oneline(&workspace.path().join(repo)).unwrap())
        .collect();
    expected.sort();
    assert_eq!(first, expected.join("\n"));
}

#[tokio::test]
async fn test_missing_repository_is_fatal() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::with_repos(&["api"]).expect("Failed to create repos");
    std::fs::create_dir(workspace.path().join("plain")).unwrap();
    let git = GitCli::new(workspace.path());

    let repos = vec![PathBuf::from("api"), PathBuf::from("plain")];
    let err = compute_signature(&repos, &git)
        .await
        .expect_err("A directory without commits must abort the run");

    match err.downcast_ref::<RidError>() {
        Some(RidError::Git { command, .. }) => {
            assert!(command.contains("--work-tree=plain"));
            assert!(command.ends_with("log --no-decorate -1 --oneline"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
