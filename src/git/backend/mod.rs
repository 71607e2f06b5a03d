// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend implementations.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! Backend             --> facade over both, owns the repo root
//! ```
//!
//! Mutations go through shell git for full CLI compatibility (merge
//! conflict markers, rebase state, hooks). Cheap reads use gix to avoid
//! subprocess overhead; plumbing reads that gix does not cover cleanly
//! (rev-list counts, porcelain status) shell out as well.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitError, GixError, TownResult};
use crate::git::{BranchName, Sha};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> TownResult<Option<String>>;

    /// Resolve a revision to its commit id (None if it does not exist).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn resolve_sha(path: &Path, reference: &str) -> TownResult<Option<Sha>>;

    /// Check whether the given fully-qualified ref exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or ref lookup fails.
    fn has_ref(path: &Path, full_ref: &str) -> TownResult<bool>;

    /// List local branch names.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or ref iteration fails.
    fn local_branches(path: &Path) -> TownResult<Vec<String>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> TownResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn resolve_sha(path: &Path, reference: &str) -> TownResult<Option<Sha>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        match repo.rev_parse_single(reference) {
            Ok(id) => Ok(Some(Sha::new(id.detach().to_string()))),
            Err(_) => Ok(None),
        }
    }

    fn has_ref(path: &Path, full_ref: &str) -> TownResult<bool> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        match repo.find_reference(full_ref) {
            Ok(_) => Ok(true),
            Err(gix::reference::find::existing::Error::NotFound { name: _ }) => Ok(false),
            Err(e) => Err(GitError::Gix(GixError::Head(e)).into()),
        }
    }

    fn local_branches(path: &Path) -> TownResult<Vec<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let platform = repo
            .references()
            .map_err(|e| GitError::Gix(GixError::RefIter(e.to_string())))?;
        let iter = platform
            .local_branches()
            .map_err(|e| GitError::Gix(GixError::RefIter(e.to_string())))?;
        let mut names = Vec::new();
        for reference in iter {
            let reference =
                reference.map_err(|e| GitError::Gix(GixError::RefIter(e.to_string())))?;
            names.push(reference.name().shorten().to_string());
        }
        names.sort_unstable();
        Ok(names)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Required for everything that mutates the repository, and for plumbing
/// queries where the porcelain output is the contract.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command. Sets `GIT_TERMINAL_PROMPT=0` so nothing ever
    /// waits for credentials, and a no-op `GIT_EDITOR` so conclude-style
    /// operations (`rebase --continue`) never open an editor.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> TownResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_EDITOR", "true")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Execute a git command where a non-zero exit is a valid "no" answer.
    fn git_probe(args: &[&str], cwd: &Path) -> Option<String> {
        Self::git_command(args, cwd).ok()
    }
}

// --- Backend facade ---

/// Typed facade over one local repository.
///
/// Owns the repository root; all step and validation code goes through this
/// type. Pure collaborator: no workflow logic lives here.
pub struct Backend {
    root: PathBuf,
}

impl Backend {
    /// Discover the repository containing `dir`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `dir` is not inside a work tree.
    pub fn discover(dir: &Path) -> TownResult<Self> {
        if !GixBackend::is_git_repo(dir) {
            return Err(GitError::RepoNotFound {
                path: dir.display().to_string(),
            }
            .into());
        }
        let top = ShellBackend::git_command(&["rev-parse", "--show-toplevel"], dir)?;
        Ok(Self {
            root: PathBuf::from(top),
        })
    }

    /// Build a backend for a known repository root. Used by tests.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // --- queries ---

    /// The currently checked out branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` if HEAD is not on a branch.
    pub fn current_branch(&self) -> TownResult<BranchName> {
        match GixBackend::current_branch(&self.root)? {
            Some(name) => Ok(BranchName::new(name)),
            None => Err(GitError::DetachedHead.into()),
        }
    }

    /// The branch that was checked out before the current one (`@{-1}`).
    ///
    /// Reflog lookups can fail on fresh repositories; that is not a failure
    /// condition here, so errors collapse to `None`.
    #[must_use]
    pub fn previous_branch(&self) -> Option<BranchName> {
        ShellBackend::git_probe(
            &["rev-parse", "--verify", "--abbrev-ref", "@{-1}"],
            &self.root,
        )
        .filter(|name| !name.is_empty())
        .map(BranchName::new)
    }

    /// Resolve a branch or revision to its commit id.
    ///
    /// # Errors
    ///
    /// Returns `GitError::BranchNotFound` if the revision does not resolve.
    pub fn sha_of(&self, reference: &str) -> TownResult<Sha> {
        GixBackend::resolve_sha(&self.root, reference)?.ok_or_else(|| {
            GitError::BranchNotFound {
                branch: reference.to_string(),
            }
            .into()
        })
    }

    /// Resolve a branch or revision, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    pub fn try_sha_of(&self, reference: &str) -> TownResult<Option<Sha>> {
        GixBackend::resolve_sha(&self.root, reference)
    }

    /// Whether a local branch with this name exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if ref lookup fails.
    pub fn has_local_branch(&self, branch: &BranchName) -> TownResult<bool> {
        GixBackend::has_ref(&self.root, &format!("refs/heads/{branch}"))
    }

    /// Whether `origin/<branch>` exists locally (i.e. the branch has a
    /// tracking branch).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if ref lookup fails.
    pub fn has_tracking_branch(&self, branch: &BranchName) -> TownResult<bool> {
        GixBackend::has_ref(&self.root, &format!("refs/remotes/origin/{branch}"))
    }

    /// All local branches, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if ref iteration fails.
    pub fn local_branches(&self) -> TownResult<Vec<BranchName>> {
        Ok(GixBackend::local_branches(&self.root)?
            .into_iter()
            .map(BranchName::new)
            .collect())
    }

    /// Local branches whose tracking branch was deleted on the remote.
    /// Only meaningful after a `fetch --prune`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the for-each-ref call fails.
    pub fn branches_with_gone_tracking(&self) -> TownResult<Vec<BranchName>> {
        let out = ShellBackend::git_command(
            &[
                "for-each-ref",
                "--format=%(refname:short) %(upstream:track)",
                "refs/heads",
            ],
            &self.root,
        )?;
        Ok(out
            .lines()
            .filter_map(|line| {
                let (name, track) = line.split_once(' ')?;
                track.contains("[gone]").then(|| BranchName::new(name))
            })
            .collect())
    }

    /// Whether the working tree has uncommitted or untracked changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status call fails.
    pub fn has_open_changes(&self) -> TownResult<bool> {
        let out = ShellBackend::git_command(&["status", "--porcelain"], &self.root)?;
        Ok(!out.is_empty())
    }

    /// Whether `branch` has commits its tracking branch does not have.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rev-list call fails.
    pub fn is_ahead_of_tracking(&self, branch: &BranchName) -> TownResult<bool> {
        let range = format!("{}..{branch}", branch.at_origin());
        let out = ShellBackend::git_command(&["rev-list", "--count", &range], &self.root)?;
        Ok(out != "0")
    }

    /// Whether the tracking branch has commits `branch` does not have.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rev-list call fails.
    pub fn is_behind_tracking(&self, branch: &BranchName) -> TownResult<bool> {
        let range = format!("{branch}..{}", branch.at_origin());
        let out = ShellBackend::git_command(&["rev-list", "--count", &range], &self.root)?;
        Ok(out != "0")
    }

    /// Whether a merge is in progress (MERGE_HEAD exists).
    #[must_use]
    pub fn has_merge_in_progress(&self) -> bool {
        ShellBackend::git_probe(&["rev-parse", "-q", "--verify", "MERGE_HEAD"], &self.root)
            .is_some()
    }

    /// Whether a rebase is in progress.
    #[must_use]
    pub fn has_rebase_in_progress(&self) -> bool {
        for dir in ["rebase-merge", "rebase-apply"] {
            if let Some(path) =
                ShellBackend::git_probe(&["rev-parse", "--git-path", dir], &self.root)
                && self.root.join(path).exists()
            {
                return true;
            }
        }
        false
    }

    /// Whether the index holds unresolved conflict entries.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the ls-files call fails.
    pub fn has_conflicts(&self) -> TownResult<bool> {
        let out = ShellBackend::git_command(&["ls-files", "--unmerged"], &self.root)?;
        Ok(!out.is_empty())
    }

    /// URL of the given remote, `None` if the remote is not configured.
    #[must_use]
    pub fn remote_url(&self, remote: &str) -> Option<String> {
        ShellBackend::git_probe(&["remote", "get-url", remote], &self.root)
            .filter(|url| !url.is_empty())
    }

    /// Whether an `origin` remote is configured.
    #[must_use]
    pub fn has_origin(&self) -> bool {
        self.remote_url("origin").is_some()
    }

    /// Read one git config value from the repository (local scope wins).
    #[must_use]
    pub fn get_config(&self, key: &str) -> Option<String> {
        ShellBackend::git_probe(&["config", "--get", key], &self.root)
    }

    /// Read one git config value from the global scope only.
    #[must_use]
    pub fn get_config_global(&self, key: &str) -> Option<String> {
        ShellBackend::git_probe(&["config", "--global", "--get", key], &self.root)
    }

    /// All config entries whose key matches the given regexp.
    #[must_use]
    pub fn config_entries_matching(&self, pattern: &str) -> Vec<(String, String)> {
        ShellBackend::git_probe(&["config", "--get-regexp", pattern], &self.root)
            .map(|out| {
                out.lines()
                    .filter_map(|line| {
                        let (key, value) = line.split_once(' ')?;
                        Some((key.to_string(), value.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- mutations ---

    /// Check out a branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    pub fn checkout(&self, branch: &BranchName) -> TownResult<()> {
        ShellBackend::git_command(&["checkout", "-q", branch.as_str()], &self.root)?;
        Ok(())
    }

    /// Create a local branch at the given starting point without checking
    /// it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if branch creation fails.
    pub fn create_branch(&self, branch: &BranchName, start_point: &str) -> TownResult<()> {
        ShellBackend::git_command(&["branch", branch.as_str(), start_point], &self.root)?;
        Ok(())
    }

    /// Delete a local branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if deletion fails (e.g. unmerged without force).
    pub fn delete_local_branch(&self, branch: &BranchName, force: bool) -> TownResult<()> {
        let flag = if force { "-D" } else { "-d" };
        ShellBackend::git_command(&["branch", flag, branch.as_str()], &self.root)?;
        Ok(())
    }

    /// Delete a branch on origin.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    pub fn delete_remote_branch(&self, branch: &BranchName) -> TownResult<()> {
        let refspec = format!(":{branch}");
        ShellBackend::git_command(&["push", "origin", &refspec], &self.root)?;
        Ok(())
    }

    /// Create a branch on origin pointing at the given commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    pub fn create_remote_branch(&self, branch: &BranchName, sha: &Sha) -> TownResult<()> {
        let refspec = format!("{sha}:refs/heads/{branch}");
        ShellBackend::git_command(&["push", "origin", &refspec], &self.root)?;
        Ok(())
    }

    /// Push the current branch to its tracking branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    pub fn push(&self, no_verify: bool) -> TownResult<()> {
        let mut args = vec!["push"];
        if no_verify {
            args.push("--no-verify");
        }
        ShellBackend::git_command(&args, &self.root)?;
        Ok(())
    }

    /// Push a branch to origin and set up its tracking branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    pub fn push_set_upstream(&self, branch: &BranchName, no_verify: bool) -> TownResult<()> {
        let mut args = vec!["push", "-u", "origin", branch.as_str()];
        if no_verify {
            args.insert(1, "--no-verify");
        }
        ShellBackend::git_command(&args, &self.root)?;
        Ok(())
    }

    /// Connect an existing local branch to its counterpart on origin.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the upstream cannot be set.
    pub fn connect_tracking_branch(&self, branch: &BranchName) -> TownResult<()> {
        let upstream = format!("--set-upstream-to={}", branch.at_origin());
        ShellBackend::git_command(&["branch", &upstream, branch.as_str()], &self.root)?;
        Ok(())
    }

    /// Fetch from origin, pruning deleted branches.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    pub fn fetch(&self) -> TownResult<()> {
        ShellBackend::git_command(&["fetch", "--prune", "--tags"], &self.root)?;
        Ok(())
    }

    /// Fetch and integrate the tracking branch of the current branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails (including merge conflicts).
    pub fn pull(&self) -> TownResult<()> {
        ShellBackend::git_command(&["pull"], &self.root)?;
        Ok(())
    }

    /// Merge the given branch into the current branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflicts or other merge failures.
    pub fn merge_no_edit(&self, branch: &str) -> TownResult<()> {
        ShellBackend::git_command(&["merge", "--no-edit", branch], &self.root)?;
        Ok(())
    }

    /// Fast-forward the current branch to the given branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the merge is not a fast-forward.
    pub fn merge_ff_only(&self, branch: &str) -> TownResult<()> {
        ShellBackend::git_command(&["merge", "--ff-only", branch], &self.root)?;
        Ok(())
    }

    /// Squash-merge the given branch into the index of the current branch.
    /// The caller commits with the desired message afterwards.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflicts.
    pub fn squash_merge(&self, branch: &BranchName) -> TownResult<()> {
        ShellBackend::git_command(&["merge", "--squash", branch.as_str()], &self.root)?;
        Ok(())
    }

    /// Commit the staged changes with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    pub fn commit(&self, message: &str) -> TownResult<()> {
        ShellBackend::git_command(&["commit", "-m", message], &self.root)?;
        Ok(())
    }

    /// Conclude an in-progress merge by committing with the prepared message.
    /// No-op when no merge is in progress.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    pub fn commit_no_edit(&self) -> TownResult<()> {
        if !self.has_merge_in_progress() {
            return Ok(());
        }
        ShellBackend::git_command(&["commit", "--no-edit"], &self.root)?;
        Ok(())
    }

    /// Stage all changes in the working tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    pub fn stage_all(&self) -> TownResult<()> {
        ShellBackend::git_command(&["add", "-A"], &self.root)?;
        Ok(())
    }

    /// Rebase the current branch onto the given branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflicts or other rebase failures.
    pub fn rebase(&self, branch: &str) -> TownResult<()> {
        ShellBackend::git_command(&["rebase", branch], &self.root)?;
        Ok(())
    }

    /// Continue an in-progress rebase. No-op when none is in progress.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rebase cannot continue.
    pub fn continue_rebase(&self) -> TownResult<()> {
        if !self.has_rebase_in_progress() {
            return Ok(());
        }
        ShellBackend::git_command(&["rebase", "--continue"], &self.root)?;
        Ok(())
    }

    /// Abort an in-progress rebase.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rebase cannot be aborted.
    pub fn abort_rebase(&self) -> TownResult<()> {
        ShellBackend::git_command(&["rebase", "--abort"], &self.root)?;
        Ok(())
    }

    /// Abort an in-progress merge.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the merge cannot be aborted.
    pub fn abort_merge(&self) -> TownResult<()> {
        ShellBackend::git_command(&["merge", "--abort"], &self.root)?;
        Ok(())
    }

    /// Stash the open changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if stashing fails.
    pub fn stash(&self) -> TownResult<()> {
        ShellBackend::git_command(&["stash", "--include-untracked"], &self.root)?;
        Ok(())
    }

    /// Pop the most recent stash entry.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on stash-pop conflicts.
    pub fn stash_pop(&self) -> TownResult<()> {
        ShellBackend::git_command(&["stash", "pop"], &self.root)?;
        Ok(())
    }

    /// Move the current branch ref to the given commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the reset fails.
    pub fn reset_to(&self, sha: &Sha, hard: bool) -> TownResult<()> {
        let mut args = vec!["reset"];
        if hard {
            args.push("--hard");
        }
        args.push(sha.as_str());
        ShellBackend::git_command(&args, &self.root)?;
        Ok(())
    }

    /// Discard all changes in the working tree and index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the reset fails.
    pub fn discard_open_changes(&self) -> TownResult<()> {
        ShellBackend::git_command(&["reset", "--hard"], &self.root)?;
        Ok(())
    }

    /// Revert the given commit on the current branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflicts or other revert failures.
    pub fn revert_commit(&self, sha: &Sha) -> TownResult<()> {
        ShellBackend::git_command(&["revert", "--no-edit", sha.as_str()], &self.root)?;
        Ok(())
    }

    /// Write a git config value (local scope).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config write fails.
    pub fn set_config(&self, key: &str, value: &str) -> TownResult<()> {
        ShellBackend::git_command(&["config", key, value], &self.root)?;
        Ok(())
    }

    /// Write a git config value (global scope).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config write fails.
    pub fn set_config_global(&self, key: &str, value: &str) -> TownResult<()> {
        ShellBackend::git_command(&["config", "--global", key, value], &self.root)?;
        Ok(())
    }

    /// Remove a git config key (local scope). No-op if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on config access failures other than a missing key.
    pub fn unset_config(&self, key: &str) -> TownResult<()> {
        match ShellBackend::git_command(&["config", "--unset", key], &self.root) {
            Ok(_) => Ok(()),
            // exit code 5 means the key did not exist
            Err(crate::error::TownError::Git(e))
                if matches!(
                    e.as_ref(),
                    GitError::CommandFailed { exit_code: 5, .. } | GitError::CommandFailed { exit_code: 1, .. }
                ) =>
            {
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a git config key (global scope). No-op if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on config access failures other than a missing key.
    pub fn unset_config_global(&self, key: &str) -> TownResult<()> {
        match ShellBackend::git_command(&["config", "--global", "--unset", key], &self.root) {
            Ok(_) => Ok(()),
            Err(crate::error::TownError::Git(e))
                if matches!(
                    e.as_ref(),
                    GitError::CommandFailed { exit_code: 5, .. } | GitError::CommandFailed { exit_code: 1, .. }
                ) =>
            {
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Open a URL in the user's browser. Best effort: tries `$BROWSER`,
    /// then the platform opener; prints the URL as fallback.
    pub fn open_browser(&self, url: &str) {
        let opener = std::env::var("BROWSER").unwrap_or_else(|_| {
            if cfg!(target_os = "macos") {
                "open".to_string()
            } else {
                "xdg-open".to_string()
            }
        });
        match Command::new(&opener).arg(url).spawn() {
            Ok(_) => tracing::debug!(url, opener = %opener, "opened browser"),
            Err(e) => {
                tracing::debug!(error = %e, opener = %opener, "could not launch browser");
                println!("{url}");
            }
        }
    }
}

#[cfg(test)]
mod tests;
