// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixture helpers for the integration suites.
//!
//! Repositories are real: created with shell git in tempdirs, with a bare
//! repository on disk acting as origin where a test needs one.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use git_town_rs::cmd::Workspace;
use git_town_rs::config::Config;
use git_town_rs::git::{Backend, BranchName};

/// A scratch repository with git-town configuration.
pub struct Fixture {
    pub repo: TempDir,
    /// Present when the fixture has an origin remote.
    pub origin: Option<TempDir>,
}

impl Fixture {
    /// A repository with one empty commit on `main`, configured as the main
    /// branch. No origin.
    pub fn new() -> Self {
        let repo = tempfile::tempdir().expect("tempdir");
        git(&["init", "--quiet", "-b", "main"], repo.path());
        git(&["config", "user.email", "test@example.com"], repo.path());
        git(&["config", "user.name", "Test"], repo.path());
        git(
            &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
            repo.path(),
        );
        git(&["config", "git-town.main-branch", "main"], repo.path());
        let fixture = Self { repo, origin: None };
        // leftover runstates from an earlier panicking run must not leak in
        let _ = fixture.workspace().store().delete();
        fixture
    }

    /// Adds a bare origin and pushes `main` to it.
    pub fn with_origin(mut self) -> Self {
        let origin = tempfile::tempdir().expect("tempdir");
        git(&["init", "--bare", "--quiet", "-b", "main"], origin.path());
        let url = format!("file://{}", origin.path().display());
        git(&["remote", "add", "origin", &url], self.repo.path());
        git(
            &["push", "-u", "origin", "main", "--quiet"],
            self.repo.path(),
        );
        self.origin = Some(origin);
        self
    }

    /// The workspace handlers operate on.
    pub fn workspace(&self) -> Workspace {
        Workspace {
            backend: Backend::at(self.repo.path()),
            config: Config::new(self.repo.path()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn backend(&self) -> Backend {
        Backend::at(self.repo.path())
    }

    pub fn config(&self) -> Config {
        Config::new(self.repo.path())
    }

    /// Creates a feature branch as a child of the given parent, with one
    /// commit writing `<name>.txt`.
    pub fn create_feature_branch(&self, name: &str, parent: &str) {
        git(&["checkout", "-q", "-b", name, parent], self.repo.path());
        self.commit_file(&format!("{name}.txt"), name);
        git(
            &[
                "config",
                &format!("git-town.branch.{name}.parent"),
                parent,
            ],
            self.repo.path(),
        );
    }

    /// Commits a file with the given content on the current branch.
    pub fn commit_file(&self, file: &str, content: &str) {
        std::fs::write(self.repo.path().join(file), content).expect("write file");
        git(&["add", "-A"], self.repo.path());
        git(
            &["commit", "-m", &format!("add {file}"), "--quiet"],
            self.repo.path(),
        );
    }

    pub fn checkout(&self, branch: &str) {
        git(&["checkout", "-q", branch], self.repo.path());
    }

    pub fn local_branches(&self) -> Vec<BranchName> {
        self.backend().local_branches().expect("list branches")
    }
}

/// Runs a git command in the given directory, asserting success.
pub fn git(args: &[&str], cwd: &Path) {
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

/// Runs a git query and returns the trimmed stdout.
pub fn git_output(args: &[&str], cwd: &Path) -> String {
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
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
