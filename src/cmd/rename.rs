// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `rename-branch` command.

use super::Workspace;
use crate::cli::workflow::RenameBranchArgs;
use crate::error::{GitError, Result, bail_out};
use crate::git::BranchName;
use crate::plan::{StepList, reparent_children};
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{ensure_has_branch, ensure_no_unfinished_run};

/// Renames a branch locally and on origin, rewriting every lineage entry
/// that mentions it.
///
/// # Errors
///
/// Fails when the old branch does not exist, the new name is taken, or the
/// branch is the main branch.
pub async fn run_rename_command(args: &RenameBranchArgs, ws: &Workspace) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let old = BranchName::new(args.old.clone());
    let new = BranchName::new(args.new.clone());
    ensure_has_branch(&ws.backend, &old)?;
    if ws.backend.has_local_branch(&new)? {
        return Err(GitError::BranchAlreadyExists {
            branch: new.to_string(),
        }
        .into());
    }
    if ws.config.is_main_branch(&old) {
        return Err(bail_out("the main branch cannot be renamed").into());
    }

    let offline = ws.config.offline();
    let has_tracking = ws.backend.has_tracking_branch(&old)?;
    let current = ws.backend.current_branch()?;

    // open proposals targeting the old name must move to the new one before
    // the old branch disappears from origin
    let mut retargets = Vec::new();
    let connector = if has_tracking && !offline {
        crate::forge::detect(&ws.backend, &ws.config)?
    } else {
        None
    };
    if let Some(connector) = connector.as_deref() {
        for child in ws.config.lineage().children(&old) {
            if let Some(proposal) = connector.find_proposal(&child, &old).await.ok().flatten() {
                retargets.push(Step::RetargetProposal {
                    number: proposal.number,
                    new_target: new.clone(),
                    previous_target: old.clone(),
                });
            }
        }
    }

    let mut list = StepList::new();
    if !offline && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    list.push(Step::CreateBranch {
        branch: new.clone(),
        start_point: old.to_string(),
    });
    if ws.config.is_perennial_branch(&old) {
        list.push(Step::RemoveFromPerennialBranches {
            branch: old.clone(),
        });
        list.push(Step::AddToPerennialBranches { branch: new.clone() });
    } else if let Some(parent) = ws.config.parent_of(&old) {
        list.push(Step::SetParent {
            branch: new.clone(),
            parent,
        });
    }
    reparent_children(&mut list, &ws.config, &old, &new);
    list.push(Step::DeleteParentBranchEntry {
        branch: old.clone(),
    });
    if current == old {
        list.push(Step::Checkout {
            branch: new.clone(),
        });
    }
    if has_tracking && !offline {
        list.push(Step::CreateTrackingBranch {
            branch: new,
            no_verify: !ws.config.push_hook(),
        });
        // the new target branch now exists on origin
        for step in retargets {
            list.push(step);
        }
        list.push(Step::DeleteOriginBranch {
            branch: old.clone(),
        });
    }
    list.push(Step::DeleteLocalBranch {
        branch: old,
        force: true,
    });
    ws.execute_new("rename-branch", list.into_steps(), false)
        .await
}
