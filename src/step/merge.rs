// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge-family steps and their history-rewrite inverses.

use super::{RunContext, Step};
use crate::error::TownResult;
use crate::git::{Backend, BranchName};

/// Squash-merge `branch` into the current branch and commit with `message`.
pub(super) fn squash_merge(
    ctx: &RunContext<'_>,
    branch: &BranchName,
    message: &str,
) -> TownResult<()> {
    ctx.backend.squash_merge(branch)?;
    ctx.backend.commit(message)
}

/// The inverse of anything that moves the current branch ref forward:
/// a hard reset to the SHA the branch points at right now.
pub(super) fn undo_history_rewrite(backend: &Backend) -> TownResult<Vec<Step>> {
    let current = backend.current_branch()?;
    let sha = backend.sha_of(current.as_str())?;
    Ok(vec![Step::ResetToSha { sha, hard: true }])
}

/// The inverse of a reset: reset back to where the branch is right now.
pub(super) fn undo_reset(backend: &Backend, hard: bool) -> TownResult<Vec<Step>> {
    let current = backend.current_branch()?;
    let sha = backend.sha_of(current.as_str())?;
    Ok(vec![Step::ResetToSha { sha, hard }])
}
