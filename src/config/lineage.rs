// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The branch lineage: a child-to-parent map among branches.
//!
//! Invariants: acyclic; roots are the main branch and perennial branches
//! (which never appear as children).

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::git::BranchName;

/// Child-to-parent mapping for feature branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineage {
    parents: BTreeMap<BranchName, BranchName>,
}

impl Lineage {
    /// An empty lineage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lineage from (child, parent) pairs. Later pairs win.
    pub fn from_entries(entries: impl IntoIterator<Item = (BranchName, BranchName)>) -> Self {
        Self {
            parents: entries.into_iter().collect(),
        }
    }

    /// The parent of the given branch, if recorded.
    #[must_use]
    pub fn parent(&self, branch: &BranchName) -> Option<&BranchName> {
        self.parents.get(branch)
    }

    /// Whether the given branch has a recorded parent.
    #[must_use]
    pub fn has_parent(&self, branch: &BranchName) -> bool {
        self.parents.contains_key(branch)
    }

    /// Records `parent` as the parent of `child`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LineageCycle` if the edge would make the
    /// mapping cyclic.
    pub fn set_parent(
        &mut self,
        child: BranchName,
        parent: BranchName,
    ) -> std::result::Result<(), ConfigError> {
        if child == parent || self.ancestors(&parent).contains(&child) {
            return Err(ConfigError::LineageCycle {
                child: child.to_string(),
                parent: parent.to_string(),
            });
        }
        self.parents.insert(child, parent);
        Ok(())
    }

    /// Removes the parent entry for the given branch.
    pub fn remove(&mut self, branch: &BranchName) -> Option<BranchName> {
        self.parents.remove(branch)
    }

    /// The direct children of the given branch, sorted.
    #[must_use]
    pub fn children(&self, branch: &BranchName) -> Vec<BranchName> {
        self.parents
            .iter()
            .filter(|(_, parent)| *parent == branch)
            .map(|(child, _)| child.clone())
            .collect()
    }

    /// All ancestors of the given branch, root first, excluding the branch
    /// itself. Stops if it encounters a branch without a recorded parent.
    #[must_use]
    pub fn ancestors(&self, branch: &BranchName) -> Vec<BranchName> {
        let mut chain = Vec::new();
        let mut current = branch;
        while let Some(parent) = self.parents.get(current) {
            // a malformed mapping must not hang us
            if chain.contains(parent) || parent == branch {
                break;
            }
            chain.push(parent.clone());
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// Whether `ancestor` appears in the ancestry of `branch`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: &BranchName, branch: &BranchName) -> bool {
        self.ancestors(branch).contains(ancestor)
    }

    /// All branches with a recorded parent, sorted.
    #[must_use]
    pub fn branches(&self) -> Vec<&BranchName> {
        self.parents.keys().collect()
    }

    /// Iterates (child, parent) pairs in branch order.
    pub fn entries(&self) -> impl Iterator<Item = (&BranchName, &BranchName)> {
        self.parents.iter()
    }

    /// Whether no parent entries are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of recorded parent entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }
}
