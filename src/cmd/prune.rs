// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `prune-branches` command: drop local branches whose tracking branch
//! is gone.

use super::Workspace;
use crate::error::Result;
use crate::plan::{StepList, delete_feature_branch_steps};
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{Validator, ensure_no_unfinished_run};

/// Deletes every local feature branch whose tracking branch was removed on
/// origin, cleaning up lineage entries.
///
/// # Errors
///
/// Fails on validation errors and fatal runner errors.
pub async fn run_prune_command(ws: &Workspace, prompter: &mut dyn Prompter) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let main = Validator::new(&ws.backend, &ws.config, prompter).ensure_main_branch()?;
    let current = ws.backend.current_branch()?;

    // prune decisions need fresh remote state
    if !ws.config.offline() && ws.backend.has_origin() {
        ws.backend.fetch()?;
    }

    let mut list = StepList::new();
    for branch in ws.backend.branches_with_gone_tracking()? {
        if !ws.config.is_feature_branch(&branch) {
            continue;
        }
        if branch == current {
            list.push(Step::Checkout {
                branch: main.clone(),
            });
        }
        // the remote side is already gone; only local cleanup remains
        delete_feature_branch_steps(&mut list, &branch, &ws.backend, &ws.config, false)?;
    }
    if list.is_empty() {
        println!("no branches to prune");
        return Ok(Outcome::Completed);
    }
    ws.execute_new("prune-branches", list.into_steps(), false)
        .await
}
