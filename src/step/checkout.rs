// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checkout steps, including the `@{-1}` preservation dance.

use super::{RunContext, Step};
use crate::error::TownResult;
use crate::git::{Backend, BranchName};

/// The inverse of a checkout: go back to the branch that is current now.
pub(super) fn undo_checkout(backend: &Backend, target: &BranchName) -> TownResult<Vec<Step>> {
    let current = backend.current_branch()?;
    if current == *target {
        return Ok(Vec::new());
    }
    Ok(vec![Step::Checkout { branch: current }])
}

/// Restore git's previous-branch reference (`@{-1}`) after a command that
/// checked out other branches along the way.
///
/// Computes which branch the user would expect `git checkout -` to reach,
/// then performs a double checkout to make the reflog agree. Reading the
/// current `@{-1}` can fail on fresh repositories; that is not a failure
/// condition, the step simply proceeds with the dance.
pub(super) fn preserve_checkout_history(
    ctx: &RunContext<'_>,
    initial_branch: &BranchName,
    initial_previous_branch: Option<&BranchName>,
) -> TownResult<()> {
    let expected = expected_previous_branch(ctx, initial_branch, initial_previous_branch)?;
    let Some(expected) = expected else {
        return Ok(());
    };
    if ctx.backend.previous_branch().as_ref() == Some(&expected) {
        return Ok(());
    }
    let current = ctx.backend.current_branch()?;
    if expected == current {
        return Ok(());
    }
    ctx.backend.checkout(&expected)?;
    ctx.backend.checkout(&current)
}

/// Which branch `@{-1}` should point at after the command.
///
/// If the previously checked out branch still exists, the user expects it
/// back, unless we are no longer on the initial branch, in which case the
/// initial branch (or the main branch as fallback) is the natural previous
/// one.
fn expected_previous_branch(
    ctx: &RunContext<'_>,
    initial_branch: &BranchName,
    initial_previous_branch: Option<&BranchName>,
) -> TownResult<Option<BranchName>> {
    let main = ctx.config.main_branch();
    let previous_exists = match initial_previous_branch {
        Some(branch) => ctx.backend.has_local_branch(branch)?,
        None => false,
    };
    if previous_exists {
        let previous = initial_previous_branch
            .cloned()
            .unwrap_or_else(|| initial_branch.clone());
        if ctx.backend.current_branch()? == *initial_branch {
            return Ok(Some(previous));
        }
        if ctx.backend.has_local_branch(initial_branch)? {
            return Ok(Some(initial_branch.clone()));
        }
    }
    Ok(main)
}
