// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `ship` command: land a finished feature branch in its parent.
//!
//! With a forge connector and an open proposal, shipping merges via the
//! forge API; otherwise it squash-merges locally.

use super::Workspace;
use crate::cli::workflow::ShipArgs;
use crate::error::Result;
use crate::git::BranchName;
use crate::plan::{StepList, reparent_children, sync_branch_steps};
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{
    Validator, ensure_clean_workspace, ensure_has_branch, ensure_is_feature_branch,
    ensure_no_unfinished_run,
};

/// Ships a feature branch: syncs it and its parent, merges it into the
/// parent, deletes it everywhere, and mends the lineage.
///
/// # Errors
///
/// Fails on validation errors and fatal runner errors.
pub async fn run_ship_command(
    args: &ShipArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    ensure_clean_workspace(&ws.backend)?;
    let current = ws.backend.current_branch()?;
    let target = args
        .branch
        .as_ref()
        .map_or_else(|| current.clone(), |name| BranchName::new(name.clone()));
    ensure_has_branch(&ws.backend, &target)?;
    ensure_is_feature_branch(&ws.config, &target, "ship")?;
    Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(&target)?;
    let parent = ws
        .config
        .parent_of(&target)
        .or_else(|| ws.config.main_branch())
        .unwrap_or_else(|| BranchName::new("main"));

    let offline = ws.config.offline();
    let connector = crate::forge::detect(&ws.backend, &ws.config)?;

    // an open proposal switches shipping to the forge API
    let proposal = match connector.as_deref() {
        Some(connector) if !offline => {
            connector.find_proposal(&target, &parent).await.ok().flatten()
        }
        _ => None,
    };

    let message = args.message.clone().unwrap_or_else(|| {
        proposal
            .as_ref()
            .map_or_else(|| target.to_string(), |p| p.title.clone())
    });

    let mut list = StepList::new();
    if !offline && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    // bring the branch and its parent up to date before landing it
    sync_branch_steps(&mut list, &parent, &ws.backend, &ws.config)?;
    sync_branch_steps(&mut list, &target, &ws.backend, &ws.config)?;
    list.push(Step::Checkout {
        branch: parent.clone(),
    });

    if let Some(proposal) = &proposal {
        list.push(Step::MergeProposal {
            number: proposal.number,
            message: message.clone(),
        });
        // the local parent receives the merge commit from origin
        list.push(Step::Pull);
    } else {
        list.push(Step::SquashMerge {
            branch: target.clone(),
            message,
        });
        if !offline && ws.backend.has_tracking_branch(&parent)? {
            list.push(Step::PushBranch {
                branch: parent.clone(),
                no_verify: !ws.config.push_hook(),
            });
        }
    }

    if ws.config.ship_delete_remote_branch()
        && !offline
        && ws.backend.has_tracking_branch(&target)?
    {
        list.push(Step::DeleteOriginBranch {
            branch: target.clone(),
        });
    }
    list.push(Step::DeleteLocalBranch {
        branch: target.clone(),
        force: true,
    });
    reparent_children(&mut list, &ws.config, &target, &parent);
    list.push(Step::DeleteParentBranchEntry { branch: target });

    ws.execute_new("ship", list.into_steps(), false).await
}
