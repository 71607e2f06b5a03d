// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `kill` command: delete a feature branch and mend the lineage.

use super::Workspace;
use crate::cli::workflow::TargetBranchArgs;
use crate::error::Result;
use crate::git::BranchName;
use crate::plan::{StepList, delete_feature_branch_steps};
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{
    Validator, ensure_has_branch, ensure_is_feature_branch, ensure_no_unfinished_run,
};

/// Deletes a feature branch locally and on origin, re-parenting its
/// children onto its parent.
///
/// # Errors
///
/// Fails when targeting the main or a perennial branch, or when the branch
/// does not exist.
pub async fn run_kill_command(
    args: &TargetBranchArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let current = ws.backend.current_branch()?;
    let target = args
        .branch
        .as_ref()
        .map_or_else(|| current.clone(), |name| BranchName::new(name.clone()));
    ensure_has_branch(&ws.backend, &target)?;
    ensure_is_feature_branch(&ws.config, &target, "kill")?;
    Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(&target)?;
    let parent = ws
        .config
        .parent_of(&target)
        .or_else(|| ws.config.main_branch())
        .unwrap_or_else(|| BranchName::new("main"));

    let mut list = StepList::new();
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    // open proposals of child branches follow the children onto the new
    // parent; this must happen while the killed branch still exists on origin
    let connector = if ws.config.offline() {
        None
    } else {
        crate::forge::detect(&ws.backend, &ws.config)?
    };
    if let Some(connector) = connector.as_deref() {
        for child in ws.config.lineage().children(&target) {
            if let Some(proposal) = connector.find_proposal(&child, &target).await.ok().flatten()
            {
                list.push(Step::RetargetProposal {
                    number: proposal.number,
                    new_target: parent.clone(),
                    previous_target: target.clone(),
                });
            }
        }
    }
    if target == current {
        // open changes die with the branch, recorded in a WIP commit
        if ws.backend.has_open_changes()? {
            list.push(Step::CommitOpenChanges);
        }
        list.push(Step::Checkout {
            branch: parent.clone(),
        });
    }
    delete_feature_branch_steps(&mut list, &target, &ws.backend, &ws.config, true)?;
    ws.execute_new("kill", list.into_steps(), false).await
}
