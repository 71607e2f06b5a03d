// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `sync` command: update branches with their parents and with origin.

use super::Workspace;
use crate::cli::workflow::SyncArgs;
use crate::error::Result;
use crate::plan::{StepList, sync_all_branch_order, sync_branch_steps};
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{Validator, ensure_no_unfinished_run};

/// Syncs the current branch (or all branches) with their parents and their
/// tracking branches.
///
/// # Errors
///
/// Fails if validation cannot complete or the runner hits a fatal error.
pub async fn run_sync_command(
    args: &SyncArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let initial = ws.backend.current_branch()?;
    let mut validator = Validator::new(&ws.backend, &ws.config, prompter);
    validator.ensure_main_branch()?;
    validator.ensure_knows_parents(&initial)?;

    let branches = if args.all {
        let order = sync_all_branch_order(&ws.backend, &ws.config)?;
        for branch in &order {
            if ws.config.is_feature_branch(branch) {
                Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(branch)?;
            }
        }
        order
    } else {
        let mut chain = ws.config.lineage().ancestors(&initial);
        chain.push(initial.clone());
        chain
    };

    let initial_previous = ws.backend.previous_branch();
    let stash = ws.backend.has_open_changes()?;

    let mut list = StepList::new();
    if stash {
        list.push(Step::StashOpenChanges);
    }
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    for branch in &branches {
        sync_branch_steps(&mut list, branch, &ws.backend, &ws.config)?;
    }
    list.push(Step::Checkout {
        branch: initial.clone(),
    });
    if stash {
        list.push(Step::RestoreOpenChanges);
    }
    list.push(Step::PreserveCheckoutHistory {
        initial_branch: initial,
        initial_previous_branch: initial_previous,
    });

    ws.execute_new("sync", list.into_steps(), args.dry_run).await
}
