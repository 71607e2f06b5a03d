// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration-editing steps.
//!
//! These run against the config store, not the working tree; the runner
//! guarantees a later step observes every earlier write.

use super::{RunContext, Step};
use crate::config::Config;
use crate::error::TownResult;
use crate::git::{Backend, BranchName};

/// Add a branch to the perennial set.
pub(super) fn add_perennial(ctx: &RunContext<'_>, branch: &BranchName) -> TownResult<()> {
    ctx.config.add_perennial_branch(branch)
}

/// Remove a branch from the perennial set.
pub(super) fn remove_perennial(ctx: &RunContext<'_>, branch: &BranchName) -> TownResult<()> {
    ctx.config.remove_perennial_branch(branch)
}

/// The inverse of a parent edit: restore the parent entry recorded right
/// now, or remove the entry if there is none.
pub(super) fn undo_parent_edit(backend: &Backend, branch: &BranchName) -> Vec<Step> {
    let config = Config::new(backend.root());
    match config.parent_of(branch) {
        Some(parent) => vec![Step::SetParent {
            branch: branch.clone(),
            parent,
        }],
        None => vec![Step::DeleteParentBranchEntry {
            branch: branch.clone(),
        }],
    }
}
