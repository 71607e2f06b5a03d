// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::{Backend, GitQuery, GixBackend};
use crate::git::BranchName;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a repository with one empty commit on `main`.
fn init_repo(path: &Path) {
    git(&["init", "--quiet", "-b", "main"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
    git(
        &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
        path,
    );
}

#[test]
fn test_is_git_repo() {
    let temp = temp_dir();
    assert!(!GixBackend::is_git_repo(temp.path()));
    init_repo(temp.path());
    assert!(GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_current_branch() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());
    assert_eq!(
        backend.current_branch().expect("current branch"),
        BranchName::new("main")
    );
}

#[test]
fn test_create_and_delete_branch() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());

    let feature = BranchName::new("feature");
    backend
        .create_branch(&feature, "main")
        .expect("create branch");
    assert!(backend.has_local_branch(&feature).expect("has branch"));
    assert_eq!(
        backend.sha_of("feature").expect("sha"),
        backend.sha_of("main").expect("sha")
    );

    backend
        .delete_local_branch(&feature, false)
        .expect("delete branch");
    assert!(!backend.has_local_branch(&feature).expect("has branch"));
}

#[test]
fn test_local_branches_sorted() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());
    backend
        .create_branch(&BranchName::new("zeta"), "main")
        .expect("create");
    backend
        .create_branch(&BranchName::new("alpha"), "main")
        .expect("create");

    let branches = backend.local_branches().expect("list");
    assert_eq!(
        branches,
        vec![
            BranchName::new("alpha"),
            BranchName::new("main"),
            BranchName::new("zeta"),
        ]
    );
}

#[test]
fn test_open_changes_detection() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());
    assert!(!backend.has_open_changes().expect("status"));

    std::fs::write(temp.path().join("file.txt"), "content").expect("write file");
    assert!(backend.has_open_changes().expect("status"));

    backend.stash().expect("stash");
    assert!(!backend.has_open_changes().expect("status"));
    backend.stash_pop().expect("pop");
    assert!(backend.has_open_changes().expect("status"));
}

#[test]
fn test_merge_conflict_is_reported_and_classifiable() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());

    std::fs::write(temp.path().join("file.txt"), "main content").expect("write");
    git(&["add", "-A"], temp.path());
    git(&["commit", "-m", "main change", "--quiet"], temp.path());

    let feature = BranchName::new("feature");
    backend
        .create_branch(&feature, "main~1")
        .expect("create branch");
    backend.checkout(&feature).expect("checkout");
    std::fs::write(temp.path().join("file.txt"), "feature content").expect("write");
    git(&["add", "-A"], temp.path());
    git(&["commit", "-m", "feature change", "--quiet"], temp.path());

    let result = backend.merge_no_edit("main");
    assert!(result.is_err(), "conflicting merge should fail");
    assert!(backend.has_merge_in_progress());
    assert!(backend.has_conflicts().expect("conflicts"));

    backend.abort_merge().expect("abort merge");
    assert!(!backend.has_merge_in_progress());
}

#[test]
fn test_remote_branch_lifecycle_via_file_url() {
    // A bare repository on disk acts as origin.
    let remote = temp_dir();
    git(&["init", "--bare", "--quiet", "-b", "main"], remote.path());

    let local = temp_dir();
    init_repo(local.path());
    let url = format!("file://{}", remote.path().display());
    git(&["remote", "add", "origin", &url], local.path());
    git(&["push", "-u", "origin", "main", "--quiet"], local.path());

    let backend = Backend::at(local.path());
    assert!(backend.has_origin());

    let feature = BranchName::new("feature");
    backend.create_branch(&feature, "main").expect("create");
    backend
        .push_set_upstream(&feature, false)
        .expect("push -u origin feature");
    assert!(backend.has_tracking_branch(&feature).expect("tracking"));

    // ahead/behind queries against the tracking branch; the commit lands on
    // the checked out main branch
    let main = BranchName::new("main");
    assert!(!backend.is_ahead_of_tracking(&main).expect("ahead"));
    git(
        &["commit", "--allow-empty", "-m", "local only", "--quiet"],
        local.path(),
    );
    assert!(backend.is_ahead_of_tracking(&main).expect("ahead"));
    assert!(!backend.is_behind_tracking(&main).expect("behind"));
    git(&["reset", "--hard", "--quiet", "HEAD~1"], local.path());
    assert!(!backend.is_ahead_of_tracking(&main).expect("ahead"));

    backend
        .delete_remote_branch(&feature)
        .expect("delete remote");
    git(&["fetch", "--prune"], local.path());
    assert!(!backend.has_tracking_branch(&feature).expect("tracking"));

    let sha = backend.sha_of("feature").expect("sha");
    backend
        .create_remote_branch(&feature, &sha)
        .expect("recreate remote");
    git(&["fetch"], local.path());
    assert!(backend.has_tracking_branch(&feature).expect("tracking"));
}

#[test]
fn test_config_roundtrip_and_unset_is_idempotent() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());

    assert_eq!(backend.get_config("git-town.main-branch"), None);
    backend
        .set_config("git-town.main-branch", "main")
        .expect("set");
    assert_eq!(
        backend.get_config("git-town.main-branch"),
        Some("main".to_string())
    );
    backend.unset_config("git-town.main-branch").expect("unset");
    assert_eq!(backend.get_config("git-town.main-branch"), None);
    // unsetting a missing key is not an error
    backend.unset_config("git-town.main-branch").expect("unset");
}

#[test]
fn test_previous_branch_tracks_checkout_history() {
    let temp = temp_dir();
    init_repo(temp.path());
    let backend = Backend::at(temp.path());

    assert_eq!(backend.previous_branch(), None);

    let feature = BranchName::new("feature");
    backend.create_branch(&feature, "main").expect("create");
    backend.checkout(&feature).expect("checkout");
    assert_eq!(backend.previous_branch(), Some(BranchName::new("main")));
}
