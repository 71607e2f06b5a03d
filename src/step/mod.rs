// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The step catalog: the closed set of atomic operations the runner executes.
//!
//! ```text
//! Step (serde-tagged enum)
//!   |
//!   +-- run(ctx)                   execute against Backend / Forge
//!   +-- create_undo_steps(backend) inverse, computed BEFORE run
//!   +-- create_continue_steps()    what resumes after a conflict
//!   +-- create_abort_steps()       what cleans up a conflicted step
//!
//! Variant bodies live in submodules grouped by domain:
//!   branch / checkout / merge / changes / config / forge
//! ```
//!
//! Steps are value objects: constructed by the builders, serialized into the
//! runstate, executed once per resumption attempt, discarded on success.
//! Inverses never reference other steps.

mod branch;
mod changes;
mod checkout;
mod config;
mod forge;
mod merge;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::TownResult;
use crate::forge::Connector;
use crate::git::{Backend, BranchName, Sha};

/// Everything a step may touch while running.
pub struct RunContext<'a> {
    pub backend: &'a Backend,
    pub config: &'a Config,
    pub connector: Option<&'a dyn Connector>,
}

/// One atomic operation against the repository, its configuration, or its
/// forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step")]
pub enum Step {
    /// Abort an in-progress merge.
    AbortMerge,
    /// Abort an in-progress rebase.
    AbortRebase,
    /// Add a branch to the perennial set.
    AddToPerennialBranches { branch: BranchName },
    /// Check out a branch.
    Checkout { branch: BranchName },
    /// Commit all open changes as WIP on the current branch.
    CommitOpenChanges,
    /// Connect a local branch to its existing counterpart on origin.
    ConnectTrackingBranch { branch: BranchName },
    /// Conclude an in-progress merge by committing.
    ContinueMerge,
    /// Conclude an in-progress rebase.
    ContinueRebase,
    /// Create a local branch at the given starting point.
    CreateBranch { branch: BranchName, start_point: String },
    /// Open the browser on the forge's new-proposal form.
    CreateProposal { branch: BranchName },
    /// Create a branch on origin pointing at the given commit.
    CreateRemoteBranch { branch: BranchName, sha: Sha },
    /// Push a branch to origin for the first time, setting up tracking.
    CreateTrackingBranch { branch: BranchName, no_verify: bool },
    /// Delete a local branch.
    DeleteLocalBranch { branch: BranchName, force: bool },
    /// Delete a branch on origin.
    DeleteOriginBranch { branch: BranchName },
    /// Remove the lineage entry of a branch.
    DeleteParentBranchEntry { branch: BranchName },
    /// Reset the working tree, discarding all open changes.
    DiscardOpenChanges,
    /// Fast-forward the current branch to the given revision.
    FastForwardMerge { branch: String },
    /// Fetch from origin, pruning deleted branches.
    Fetch,
    /// Merge the given revision into the current branch.
    Merge { branch: String },
    /// Squash-merge a proposal via the forge API.
    MergeProposal { number: u64, message: String },
    /// Restore git's `@{-1}` reference with a double-checkout dance.
    PreserveCheckoutHistory {
        initial_branch: BranchName,
        initial_previous_branch: Option<BranchName>,
    },
    /// Fetch and integrate the tracking branch of the current branch.
    Pull,
    /// Push the current branch to its tracking branch.
    PushBranch { branch: BranchName, no_verify: bool },
    /// Rebase the current branch onto the given revision.
    RebaseBranch { branch: String },
    /// Remove a branch from the perennial set.
    RemoveFromPerennialBranches { branch: BranchName },
    /// Move the current branch ref to the given commit.
    ResetToSha { sha: Sha, hard: bool },
    /// Pop the stash created by `StashOpenChanges`.
    RestoreOpenChanges,
    /// Point an open proposal at a different target branch via the forge API.
    RetargetProposal {
        number: u64,
        new_target: BranchName,
        previous_target: BranchName,
    },
    /// Revert the given commit on the current branch.
    RevertCommit { sha: Sha },
    /// Record a lineage parent.
    SetParent { branch: BranchName, parent: BranchName },
    /// Sentinel closing one per-branch block; consumed by `skip`, a no-op
    /// during normal execution.
    SkipCurrentBranch,
    /// Squash-merge a branch into the current branch with the given message.
    SquashMerge { branch: BranchName, message: String },
    /// Stash all open changes.
    StashOpenChanges,
}

impl Step {
    /// Executes this step.
    ///
    /// # Errors
    ///
    /// Propagates backend and forge errors; the runner classifies them.
    pub async fn run(&self, ctx: &RunContext<'_>) -> TownResult<()> {
        tracing::debug!(step = %self, "running step");
        match self {
            Self::AbortMerge => ctx.backend.abort_merge(),
            Self::AbortRebase => ctx.backend.abort_rebase(),
            Self::AddToPerennialBranches { branch } => config::add_perennial(ctx, branch),
            Self::Checkout { branch } => ctx.backend.checkout(branch),
            Self::CommitOpenChanges => changes::commit_open_changes(ctx),
            Self::ConnectTrackingBranch { branch } => ctx.backend.connect_tracking_branch(branch),
            Self::ContinueMerge => ctx.backend.commit_no_edit(),
            Self::ContinueRebase => ctx.backend.continue_rebase(),
            Self::CreateBranch {
                branch,
                start_point,
            } => ctx.backend.create_branch(branch, start_point),
            Self::CreateProposal { branch } => forge::create_proposal(ctx, branch),
            Self::CreateRemoteBranch { branch, sha } => {
                ctx.backend.create_remote_branch(branch, sha)
            }
            Self::CreateTrackingBranch { branch, no_verify } => {
                ctx.backend.push_set_upstream(branch, *no_verify)
            }
            Self::DeleteLocalBranch { branch, force } => {
                ctx.backend.delete_local_branch(branch, *force)
            }
            Self::DeleteOriginBranch { branch } => ctx.backend.delete_remote_branch(branch),
            Self::DeleteParentBranchEntry { branch } => ctx.config.remove_parent_entry(branch),
            Self::DiscardOpenChanges => ctx.backend.discard_open_changes(),
            Self::FastForwardMerge { branch } => ctx.backend.merge_ff_only(branch),
            Self::Fetch => ctx.backend.fetch(),
            Self::Merge { branch } => ctx.backend.merge_no_edit(branch),
            Self::MergeProposal { number, message } => {
                forge::merge_proposal(ctx, *number, message).await
            }
            Self::PreserveCheckoutHistory {
                initial_branch,
                initial_previous_branch,
            } => checkout::preserve_checkout_history(
                ctx,
                initial_branch,
                initial_previous_branch.as_ref(),
            ),
            Self::Pull => ctx.backend.pull(),
            Self::PushBranch {
                branch: _,
                no_verify,
            } => ctx.backend.push(*no_verify),
            Self::RebaseBranch { branch } => ctx.backend.rebase(branch),
            Self::RemoveFromPerennialBranches { branch } => config::remove_perennial(ctx, branch),
            Self::ResetToSha { sha, hard } => ctx.backend.reset_to(sha, *hard),
            Self::RestoreOpenChanges => ctx.backend.stash_pop(),
            Self::RetargetProposal {
                number, new_target, ..
            } => forge::retarget_proposal(ctx, *number, new_target).await,
            Self::RevertCommit { sha } => ctx.backend.revert_commit(sha),
            Self::SetParent { branch, parent } => ctx.config.set_parent(branch, parent),
            Self::SkipCurrentBranch => Ok(()),
            Self::SquashMerge { branch, message } => merge::squash_merge(ctx, branch, message),
            Self::StashOpenChanges => ctx.backend.stash(),
        }
    }

    /// Computes the inverse of this step against the current repository
    /// state. Must be called **before** [`Step::run`]: inverses capture
    /// pre-state such as the SHA a merge is about to move away from.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend query fails.
    pub fn create_undo_steps(&self, backend: &Backend) -> TownResult<Vec<Step>> {
        match self {
            Self::AddToPerennialBranches { branch } => Ok(vec![Self::RemoveFromPerennialBranches {
                branch: branch.clone(),
            }]),
            Self::RemoveFromPerennialBranches { branch } => Ok(vec![Self::AddToPerennialBranches {
                branch: branch.clone(),
            }]),
            Self::Checkout { branch } => checkout::undo_checkout(backend, branch),
            Self::CreateBranch { branch, .. } => Ok(vec![Self::DeleteLocalBranch {
                branch: branch.clone(),
                force: true,
            }]),
            Self::CreateTrackingBranch { branch, .. } => Ok(vec![Self::DeleteOriginBranch {
                branch: branch.clone(),
            }]),
            Self::CreateRemoteBranch { branch, .. } => Ok(vec![Self::DeleteOriginBranch {
                branch: branch.clone(),
            }]),
            Self::DeleteLocalBranch { branch, .. } => branch::undo_delete_local(backend, branch),
            Self::DeleteOriginBranch { branch } => branch::undo_delete_origin(backend, branch),
            Self::Merge { .. }
            | Self::FastForwardMerge { .. }
            | Self::RebaseBranch { .. }
            | Self::SquashMerge { .. } => merge::undo_history_rewrite(backend),
            Self::ResetToSha { hard, .. } => merge::undo_reset(backend, *hard),
            Self::StashOpenChanges => Ok(vec![Self::RestoreOpenChanges]),
            Self::RestoreOpenChanges => Ok(vec![Self::StashOpenChanges]),
            Self::RetargetProposal {
                number,
                new_target,
                previous_target,
            } => Ok(vec![Self::RetargetProposal {
                number: *number,
                new_target: previous_target.clone(),
                previous_target: new_target.clone(),
            }]),
            Self::SetParent { branch, .. } | Self::DeleteParentBranchEntry { branch } => {
                Ok(config::undo_parent_edit(backend, branch))
            }
            // remote history and one-way operations have no inverse
            Self::AbortMerge
            | Self::AbortRebase
            | Self::CommitOpenChanges
            | Self::ConnectTrackingBranch { .. }
            | Self::ContinueMerge
            | Self::ContinueRebase
            | Self::CreateProposal { .. }
            | Self::DiscardOpenChanges
            | Self::Fetch
            | Self::MergeProposal { .. }
            | Self::PreserveCheckoutHistory { .. }
            | Self::Pull
            | Self::PushBranch { .. }
            | Self::RevertCommit { .. }
            | Self::SkipCurrentBranch => Ok(Vec::new()),
        }
    }

    /// The steps that resume this step after the user resolved a conflict.
    #[must_use]
    pub fn create_continue_steps(&self) -> Vec<Step> {
        match self {
            Self::Merge { .. } | Self::SquashMerge { .. } | Self::Pull => {
                vec![Self::ContinueMerge]
            }
            Self::RebaseBranch { .. } => vec![Self::ContinueRebase],
            // stash-pop conflicts leave the changes in the tree; nothing to redo
            Self::RestoreOpenChanges => Vec::new(),
            // transient failures retry the step itself
            other => vec![other.clone()],
        }
    }

    /// The steps that clean up this step after the user chose to abort.
    #[must_use]
    pub fn create_abort_steps(&self) -> Vec<Step> {
        match self {
            Self::Merge { .. } | Self::Pull => vec![Self::AbortMerge],
            Self::RebaseBranch { .. } => vec![Self::AbortRebase],
            Self::SquashMerge { .. } => vec![Self::DiscardOpenChanges],
            _ => Vec::new(),
        }
    }

    /// Whether this step talks to the network.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::CreateRemoteBranch { .. }
                | Self::CreateTrackingBranch { .. }
                | Self::DeleteOriginBranch { .. }
                | Self::Fetch
                | Self::MergeProposal { .. }
                | Self::Pull
                | Self::PushBranch { .. }
                | Self::RetargetProposal { .. }
        )
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbortMerge => write!(f, "abort the merge"),
            Self::AbortRebase => write!(f, "abort the rebase"),
            Self::AddToPerennialBranches { branch } => {
                write!(f, "add {branch:?} to the perennial branches")
            }
            Self::Checkout { branch } => write!(f, "check out {branch:?}"),
            Self::CommitOpenChanges => write!(f, "commit the open changes"),
            Self::ConnectTrackingBranch { branch } => {
                write!(f, "connect {branch:?} to its tracking branch")
            }
            Self::ContinueMerge => write!(f, "conclude the merge"),
            Self::ContinueRebase => write!(f, "conclude the rebase"),
            Self::CreateBranch {
                branch,
                start_point,
            } => write!(f, "create branch {branch:?} at {start_point}"),
            Self::CreateProposal { branch } => write!(f, "open a proposal for {branch:?}"),
            Self::CreateRemoteBranch { branch, sha } => {
                write!(f, "create {branch:?} on origin at {}", sha.short())
            }
            Self::CreateTrackingBranch { branch, .. } => {
                write!(f, "push {branch:?} to origin, setting up tracking")
            }
            Self::DeleteLocalBranch { branch, .. } => write!(f, "delete branch {branch:?}"),
            Self::DeleteOriginBranch { branch } => write!(f, "delete {branch:?} on origin"),
            Self::DeleteParentBranchEntry { branch } => {
                write!(f, "forget the parent of {branch:?}")
            }
            Self::DiscardOpenChanges => write!(f, "discard the open changes"),
            Self::FastForwardMerge { branch } => write!(f, "fast-forward to {branch}"),
            Self::Fetch => write!(f, "fetch updates from origin"),
            Self::Merge { branch } => write!(f, "merge {branch}"),
            Self::MergeProposal { number, .. } => write!(f, "merge proposal #{number}"),
            Self::PreserveCheckoutHistory { .. } => write!(f, "restore the checkout history"),
            Self::Pull => write!(f, "pull the tracking branch"),
            Self::PushBranch { branch, .. } => write!(f, "push {branch:?}"),
            Self::RebaseBranch { branch } => write!(f, "rebase onto {branch}"),
            Self::RemoveFromPerennialBranches { branch } => {
                write!(f, "remove {branch:?} from the perennial branches")
            }
            Self::ResetToSha { sha, .. } => write!(f, "reset to {}", sha.short()),
            Self::RestoreOpenChanges => write!(f, "restore the stashed changes"),
            Self::RetargetProposal {
                number, new_target, ..
            } => write!(f, "retarget proposal #{number} onto {new_target:?}"),
            Self::RevertCommit { sha } => write!(f, "revert commit {}", sha.short()),
            Self::SetParent { branch, parent } => {
                write!(f, "set the parent of {branch:?} to {parent:?}")
            }
            Self::SkipCurrentBranch => write!(f, "(end of branch block)"),
            Self::SquashMerge { branch, .. } => write!(f, "squash-merge {branch:?}"),
            Self::StashOpenChanges => write!(f, "stash the open changes"),
        }
    }
}
