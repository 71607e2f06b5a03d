// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Step-list building blocks shared by the commands.
//!
//! ```text
//! command handler
//!     |
//!     v
//! StepList  <-- sync_branch_steps()   one block per branch,
//!           <-- reparent_children()   closed by SkipCurrentBranch
//!           <-- delete_feature_branch_steps()
//!     |
//!     v
//! RunState --> Runner
//! ```
//!
//! Ordering rules: checkouts are explicit steps; deletes happen after the
//! working tree has moved off the branch; remote operations are not emitted
//! at all in offline mode.

use crate::config::{BranchKind, Config, SyncStrategy};
use crate::error::TownResult;
use crate::git::{Backend, BranchName};
use crate::step::Step;

/// An ordered list of steps under construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepList {
    steps: Vec<Step>,
}

impl StepList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Appends all steps of another list.
    pub fn extend(&mut self, other: Self) {
        self.steps.extend(other.steps);
    }

    /// The steps built so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether no steps were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl From<StepList> for Vec<Step> {
    fn from(list: StepList) -> Self {
        list.steps
    }
}

/// Appends the sync block for one branch: checkout, integrate tracking
/// branch and parent per the configured strategies, push, sentinel.
///
/// # Errors
///
/// Returns an error if a backend query fails.
pub fn sync_branch_steps(
    list: &mut StepList,
    branch: &BranchName,
    backend: &Backend,
    config: &Config,
) -> TownResult<()> {
    let offline = config.offline();
    let has_tracking = backend.has_tracking_branch(branch)?;

    list.push(Step::Checkout {
        branch: branch.clone(),
    });

    match config.branch_kind(branch) {
        BranchKind::Main | BranchKind::Perennial => {
            if has_tracking && !offline {
                match config.sync_perennial_strategy() {
                    SyncStrategy::Rebase => list.push(Step::RebaseBranch {
                        branch: branch.at_origin(),
                    }),
                    SyncStrategy::Merge => list.push(Step::Merge {
                        branch: branch.at_origin(),
                    }),
                }
            }
        }
        BranchKind::Feature => {
            let strategy = config.sync_strategy();
            if has_tracking && !offline {
                integrate(list, strategy, branch.at_origin());
            }
            if let Some(parent) = config.parent_of(branch) {
                integrate(list, strategy, parent.to_string());
            }
        }
    }

    if !offline {
        if has_tracking {
            // pushing an up-to-date branch is a cheap no-op; whether the
            // branch is ahead is only known at run time
            list.push(Step::PushBranch {
                branch: branch.clone(),
                no_verify: !config.push_hook(),
            });
        } else if backend.has_origin() && config.is_feature_branch(branch) {
            list.push(Step::CreateTrackingBranch {
                branch: branch.clone(),
                no_verify: !config.push_hook(),
            });
        }
    }

    list.push(Step::SkipCurrentBranch);
    Ok(())
}

fn integrate(list: &mut StepList, strategy: SyncStrategy, reference: String) {
    match strategy {
        SyncStrategy::Merge => list.push(Step::Merge { branch: reference }),
        SyncStrategy::Rebase => list.push(Step::RebaseBranch { branch: reference }),
    }
}

/// The branches `sync --all` walks, parents before children: the main
/// branch, the perennial branches, then every lineage branch whose ancestors
/// are already listed. Only locally existing branches are included.
///
/// # Errors
///
/// Returns an error if a backend query fails.
pub fn sync_all_branch_order(backend: &Backend, config: &Config) -> TownResult<Vec<BranchName>> {
    let local = backend.local_branches()?;
    let mut ordered = Vec::new();

    if let Some(main) = config.main_branch()
        && local.contains(&main)
    {
        ordered.push(main);
    }
    for perennial in config.perennial_branches() {
        if local.contains(&perennial) && !ordered.contains(&perennial) {
            ordered.push(perennial);
        }
    }

    let lineage = config.lineage();
    let mut remaining: Vec<BranchName> = lineage
        .branches()
        .into_iter()
        .filter(|b| local.contains(b))
        .cloned()
        .collect();
    // peel off branches whose parent is already ordered (or outside the
    // lineage); the lineage is acyclic, so this terminates
    while !remaining.is_empty() {
        let ready: Vec<BranchName> = remaining
            .iter()
            .filter(|b| {
                lineage
                    .parent(b)
                    .is_none_or(|parent| ordered.contains(parent) || !remaining.contains(parent))
            })
            .cloned()
            .collect();
        if ready.is_empty() {
            // malformed lineage; take the rest in name order
            ordered.extend(remaining.drain(..));
            break;
        }
        for branch in ready {
            remaining.retain(|b| *b != branch);
            ordered.push(branch);
        }
    }
    Ok(ordered)
}

/// Appends steps that re-parent all children of `branch` onto `new_parent`.
pub fn reparent_children(
    list: &mut StepList,
    config: &Config,
    branch: &BranchName,
    new_parent: &BranchName,
) {
    for child in config.lineage().children(branch) {
        list.push(Step::SetParent {
            branch: child,
            parent: new_parent.clone(),
        });
    }
}

/// Appends steps that delete a feature branch locally and, when tracked and
/// allowed, on origin, and clean up its lineage entries.
///
/// The working tree must already be off the branch when these steps run.
///
/// # Errors
///
/// Returns an error if a backend query fails.
pub fn delete_feature_branch_steps(
    list: &mut StepList,
    branch: &BranchName,
    backend: &Backend,
    config: &Config,
    delete_remote: bool,
) -> TownResult<()> {
    if delete_remote
        && !config.offline()
        && backend.has_tracking_branch(branch)?
    {
        list.push(Step::DeleteOriginBranch {
            branch: branch.clone(),
        });
    }
    list.push(Step::DeleteLocalBranch {
        branch: branch.clone(),
        force: true,
    });
    if let Some(parent) = config.parent_of(branch) {
        reparent_children(list, config, branch, &parent);
    }
    list.push(Step::DeleteParentBranchEntry {
        branch: branch.clone(),
    });
    Ok(())
}
