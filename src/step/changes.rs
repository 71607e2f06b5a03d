// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree change steps.

use super::RunContext;
use crate::error::TownResult;

/// Commit all open changes as a WIP commit on the current branch.
pub(super) fn commit_open_changes(ctx: &RunContext<'_>) -> TownResult<()> {
    let current = ctx.backend.current_branch()?;
    ctx.backend.stage_all()?;
    ctx.backend.commit(&format!("WIP on {current}"))
}
