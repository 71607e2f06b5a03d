// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration store backed by git config.
//!
//! ```text
//! Config
//!   |  reads:  one `git config --get-regexp ^git-town` per process,
//!   |          cached in memory
//!   |  writes: straight through to `git config`, cache updated in place
//!   v
//! git config keys (section `git-town`):
//!   main-branch                 perennial-branch-names
//!   branch.<name>.parent        push-hook
//!   sync-strategy               sync-perennial-strategy
//!   ship-delete-remote-branch   offline (global)
//!   code-hosting-driver         code-hosting-origin-hostname
//!   github-token  gitlab-token  gitea-token
//! ```
//!
//! The cache is never shared across processes; a new process re-reads.

pub mod lineage;
pub mod types;

pub use lineage::Lineage;
pub use types::{BranchKind, SyncStrategy, format_bool, parse_bool};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::TownResult;
use crate::git::{Backend, BranchName};

const KEY_MAIN_BRANCH: &str = "git-town.main-branch";
const KEY_PERENNIAL_BRANCHES: &str = "git-town.perennial-branch-names";
const KEY_PUSH_HOOK: &str = "git-town.push-hook";
const KEY_SYNC_STRATEGY: &str = "git-town.sync-strategy";
const KEY_SYNC_PERENNIAL_STRATEGY: &str = "git-town.sync-perennial-strategy";
const KEY_SHIP_DELETE_REMOTE: &str = "git-town.ship-delete-remote-branch";
const KEY_OFFLINE: &str = "git-town.offline";
const KEY_HOSTING_DRIVER: &str = "git-town.code-hosting-driver";
const KEY_ORIGIN_HOSTNAME: &str = "git-town.code-hosting-origin-hostname";

/// Typed cache over the `git-town.*` keys in git config.
///
/// Reads are served from a lazily loaded snapshot; writes go through to git
/// immediately and patch the snapshot, so later steps in the same run always
/// observe earlier writes.
pub struct Config {
    root: PathBuf,
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl Config {
    /// Creates a configuration store for the repository at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(None),
        }
    }

    /// The repository this store reads from.
    #[must_use]
    pub fn repo_root(&self) -> &Path {
        &self.root
    }

    fn backend(&self) -> Backend {
        Backend::at(&self.root)
    }

    fn with_cache<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut guard = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let cache = guard.get_or_insert_with(|| {
            self.backend()
                .config_entries_matching("^git-town")
                .into_iter()
                .collect()
        });
        f(cache)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.with_cache(|cache| cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TownResult<()> {
        self.backend().set_config(key, value)?;
        self.with_cache(|cache| {
            cache.insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    fn unset(&self, key: &str) -> TownResult<()> {
        self.backend().unset_config(key)?;
        self.with_cache(|cache| {
            cache.remove(key);
        });
        Ok(())
    }

    // --- main and perennial branches ---

    /// The configured main branch, if any.
    #[must_use]
    pub fn main_branch(&self) -> Option<BranchName> {
        self.get(KEY_MAIN_BRANCH).map(BranchName::new)
    }

    /// Sets the main branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_main_branch(&self, branch: &BranchName) -> TownResult<()> {
        self.set(KEY_MAIN_BRANCH, branch.as_str())
    }

    /// The configured perennial branches (possibly empty).
    #[must_use]
    pub fn perennial_branches(&self) -> Vec<BranchName> {
        self.get(KEY_PERENNIAL_BRANCHES)
            .map(|names| {
                names
                    .split_whitespace()
                    .map(BranchName::new)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    }

    /// Replaces the perennial branch set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_perennial_branches(&self, branches: &[BranchName]) -> TownResult<()> {
        let joined = branches
            .iter()
            .map(BranchName::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        self.set(KEY_PERENNIAL_BRANCHES, &joined)
    }

    /// Adds one branch to the perennial set if not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn add_perennial_branch(&self, branch: &BranchName) -> TownResult<()> {
        let mut branches = self.perennial_branches();
        if !branches.contains(branch) {
            branches.push(branch.clone());
            self.set_perennial_branches(&branches)?;
        }
        Ok(())
    }

    /// Removes one branch from the perennial set if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn remove_perennial_branch(&self, branch: &BranchName) -> TownResult<()> {
        let mut branches = self.perennial_branches();
        if let Some(pos) = branches.iter().position(|b| b == branch) {
            branches.remove(pos);
            self.set_perennial_branches(&branches)?;
        }
        Ok(())
    }

    /// Whether the given branch is the main branch.
    #[must_use]
    pub fn is_main_branch(&self, branch: &BranchName) -> bool {
        self.main_branch().as_ref() == Some(branch)
    }

    /// Whether the given branch is in the perennial set.
    #[must_use]
    pub fn is_perennial_branch(&self, branch: &BranchName) -> bool {
        self.perennial_branches().contains(branch)
    }

    /// The derived kind of the given branch.
    #[must_use]
    pub fn branch_kind(&self, branch: &BranchName) -> BranchKind {
        if self.is_main_branch(branch) {
            BranchKind::Main
        } else if self.is_perennial_branch(branch) {
            BranchKind::Perennial
        } else {
            BranchKind::Feature
        }
    }

    /// Whether the given branch is a feature branch.
    #[must_use]
    pub fn is_feature_branch(&self, branch: &BranchName) -> bool {
        self.branch_kind(branch) == BranchKind::Feature
    }

    // --- lineage ---

    fn parent_key(branch: &BranchName) -> String {
        format!("git-town.branch.{branch}.parent")
    }

    /// The full branch lineage recorded in config.
    #[must_use]
    pub fn lineage(&self) -> Lineage {
        self.with_cache(|cache| {
            Lineage::from_entries(cache.iter().filter_map(|(key, value)| {
                let child = key
                    .strip_prefix("git-town.branch.")?
                    .strip_suffix(".parent")?;
                Some((BranchName::new(child), BranchName::new(value.clone())))
            }))
        })
    }

    /// The recorded parent of the given branch.
    #[must_use]
    pub fn parent_of(&self, branch: &BranchName) -> Option<BranchName> {
        self.get(&Self::parent_key(branch)).map(BranchName::new)
    }

    /// Records the parent of a branch.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LineageCycle` if the edge would create a cycle,
    /// or a git error if the config write fails.
    pub fn set_parent(&self, child: &BranchName, parent: &BranchName) -> TownResult<()> {
        let mut lineage = self.lineage();
        lineage
            .set_parent(child.clone(), parent.clone())
            .map_err(|e| -> crate::error::TownError { e.into() })?;
        self.set(&Self::parent_key(child), parent.as_str())
    }

    /// Removes the parent entry of a branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn remove_parent_entry(&self, branch: &BranchName) -> TownResult<()> {
        self.unset(&Self::parent_key(branch))
    }

    // --- behavior toggles ---

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(text) => match parse_bool(&text, key) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key, value = %text, "ignoring invalid boolean configuration");
                    default
                }
            },
            None => default,
        }
    }

    /// Whether pushes run the pre-push hook (default: true).
    #[must_use]
    pub fn push_hook(&self) -> bool {
        self.get_bool(KEY_PUSH_HOOK, true)
    }

    /// The push-hook setting in the global scope (default: true).
    #[must_use]
    pub fn push_hook_global(&self) -> bool {
        self.backend()
            .get_config_global(KEY_PUSH_HOOK)
            .and_then(|text| parse_bool(&text, KEY_PUSH_HOOK).ok())
            .unwrap_or(true)
    }

    /// Sets the push-hook flag locally or globally.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_push_hook(&self, value: bool, global: bool) -> TownResult<()> {
        let text = if value { "true" } else { "false" };
        if global {
            self.backend().set_config_global(KEY_PUSH_HOOK, text)?;
            self.with_cache(|cache| {
                // the merged view changes only when no local override exists
                cache
                    .entry(KEY_PUSH_HOOK.to_string())
                    .or_insert_with(|| text.to_string());
            });
            Ok(())
        } else {
            self.set(KEY_PUSH_HOOK, text)
        }
    }

    /// The sync strategy for feature branches (default: merge).
    #[must_use]
    pub fn sync_strategy(&self) -> SyncStrategy {
        self.get(KEY_SYNC_STRATEGY)
            .and_then(|text| text.parse().ok())
            .unwrap_or(SyncStrategy::Merge)
    }

    /// Sets the sync strategy for feature branches.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_sync_strategy(&self, strategy: SyncStrategy) -> TownResult<()> {
        self.set(KEY_SYNC_STRATEGY, &strategy.to_string())
    }

    /// The sync strategy for perennial branches (default: rebase).
    #[must_use]
    pub fn sync_perennial_strategy(&self) -> SyncStrategy {
        self.get(KEY_SYNC_PERENNIAL_STRATEGY)
            .and_then(|text| text.parse().ok())
            .unwrap_or(SyncStrategy::Rebase)
    }

    /// Sets the sync strategy for perennial branches.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_sync_perennial_strategy(&self, strategy: SyncStrategy) -> TownResult<()> {
        self.set(KEY_SYNC_PERENNIAL_STRATEGY, &strategy.to_string())
    }

    /// Whether shipping deletes the remote feature branch (default: true).
    #[must_use]
    pub fn ship_delete_remote_branch(&self) -> bool {
        self.get_bool(KEY_SHIP_DELETE_REMOTE, true)
    }

    /// Whether git-town operates without network access (default: false).
    #[must_use]
    pub fn offline(&self) -> bool {
        self.get_bool(KEY_OFFLINE, false)
    }

    /// Sets offline mode. Stored globally: offline is a property of the
    /// machine, not of one repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the config write fails.
    pub fn set_offline(&self, value: bool) -> TownResult<()> {
        let text = if value { "true" } else { "false" };
        self.backend().set_config_global(KEY_OFFLINE, text)?;
        self.with_cache(|cache| {
            cache.insert(KEY_OFFLINE.to_string(), text.to_string());
        });
        Ok(())
    }

    // --- forge settings ---

    /// The manually configured hosting driver name, if any.
    #[must_use]
    pub fn hosting_driver(&self) -> Option<String> {
        self.get(KEY_HOSTING_DRIVER)
    }

    /// The manually configured origin hostname override, if any.
    #[must_use]
    pub fn origin_hostname_override(&self) -> Option<String> {
        self.get(KEY_ORIGIN_HOSTNAME)
    }

    /// The API token for the given forge key (`github-token` etc.).
    #[must_use]
    pub fn forge_token(&self, key: &str) -> Option<String> {
        self.get(&format!("git-town.{key}"))
    }

    // --- maintenance ---

    /// Removes all git-town configuration from the repository, including
    /// the lineage.
    ///
    /// # Errors
    ///
    /// Returns an error if a config write fails.
    pub fn reset(&self) -> TownResult<()> {
        let keys: Vec<String> = self.with_cache(|cache| cache.keys().cloned().collect());
        let backend = self.backend();
        for key in keys {
            backend.unset_config(&key)?;
        }
        self.with_cache(HashMap::clear);
        Ok(())
    }

    /// All cached entries, sorted by key. Used by `git-town config`.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> =
            self.with_cache(|cache| cache.clone().into_iter().collect::<Vec<_>>());
        entries.sort();
        entries
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
