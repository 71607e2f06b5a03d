// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Undo synthesis for branch creation and deletion steps.

use super::Step;
use crate::error::TownResult;
use crate::git::{Backend, BranchName};

/// The inverse of deleting a local branch: recreate it at the SHA it
/// points to right now.
pub(super) fn undo_delete_local(
    backend: &Backend,
    branch: &BranchName,
) -> TownResult<Vec<Step>> {
    let Some(sha) = backend.try_sha_of(branch.as_str())? else {
        return Ok(Vec::new());
    };
    Ok(vec![Step::CreateBranch {
        branch: branch.clone(),
        start_point: sha.to_string(),
    }])
}

/// The inverse of deleting a branch on origin: recreate it at the SHA the
/// tracking branch points to right now.
///
/// Best effort: the recreated branch only carries history the remote still
/// has; a remote that garbage-collected the commits cannot be restored.
pub(super) fn undo_delete_origin(
    backend: &Backend,
    branch: &BranchName,
) -> TownResult<Vec<Step>> {
    let Some(sha) = backend.try_sha_of(&branch.at_origin())? else {
        return Ok(Vec::new());
    };
    Ok(vec![Step::CreateRemoteBranch {
        branch: branch.clone(),
        sha,
    }])
}
