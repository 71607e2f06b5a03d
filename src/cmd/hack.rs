// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The branch-creation commands: `hack`, `append`, `prepend`.

use super::Workspace;
use crate::cli::workflow::NewBranchArgs;
use crate::error::{GitError, Result};
use crate::git::BranchName;
use crate::plan::StepList;
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{Validator, ensure_no_unfinished_run};

/// Creates a new feature branch off the main branch and checks it out.
///
/// # Errors
///
/// Fails if the branch already exists or validation cannot complete.
pub async fn run_hack_command(
    args: &NewBranchArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let new_branch = BranchName::new(args.branch.clone());
    ensure_branch_is_new(ws, &new_branch)?;
    let main = Validator::new(&ws.backend, &ws.config, prompter).ensure_main_branch()?;

    let mut list = StepList::new();
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    append_creation_steps(&mut list, &new_branch, &main);
    ws.execute_new("hack", list.into_steps(), false).await
}

/// Creates a new feature branch as a child of the current branch.
///
/// # Errors
///
/// Fails if the branch already exists or validation cannot complete.
pub async fn run_append_command(
    args: &NewBranchArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let new_branch = BranchName::new(args.branch.clone());
    ensure_branch_is_new(ws, &new_branch)?;
    let current = ws.backend.current_branch()?;
    Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(&current)?;

    let mut list = StepList::new();
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    append_creation_steps(&mut list, &new_branch, &current);
    ws.execute_new("append", list.into_steps(), false).await
}

/// Inserts a new feature branch between the current branch and its parent.
///
/// # Errors
///
/// Fails if the branch already exists, the current branch is not a feature
/// branch, or validation cannot complete.
pub async fn run_prepend_command(
    args: &NewBranchArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    let new_branch = BranchName::new(args.branch.clone());
    ensure_branch_is_new(ws, &new_branch)?;
    let current = ws.backend.current_branch()?;
    crate::validate::ensure_is_feature_branch(&ws.config, &current, "prepend")?;
    Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(&current)?;
    let old_parent = ws
        .config
        .parent_of(&current)
        .unwrap_or_else(|| BranchName::new("main"));

    let mut list = StepList::new();
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    list.push(Step::CreateBranch {
        branch: new_branch.clone(),
        start_point: old_parent.to_string(),
    });
    list.push(Step::SetParent {
        branch: new_branch.clone(),
        parent: old_parent,
    });
    list.push(Step::SetParent {
        branch: current,
        parent: new_branch.clone(),
    });
    list.push(Step::Checkout { branch: new_branch });
    ws.execute_new("prepend", list.into_steps(), false).await
}

fn ensure_branch_is_new(ws: &Workspace, branch: &BranchName) -> Result<()> {
    if ws.backend.has_local_branch(branch)? {
        return Err(GitError::BranchAlreadyExists {
            branch: branch.to_string(),
        }
        .into());
    }
    Ok(())
}

fn append_creation_steps(list: &mut StepList, new_branch: &BranchName, parent: &BranchName) {
    list.push(Step::CreateBranch {
        branch: new_branch.clone(),
        start_point: parent.to_string(),
    });
    list.push(Step::SetParent {
        branch: new_branch.clone(),
        parent: parent.clone(),
    });
    list.push(Step::Checkout {
        branch: new_branch.clone(),
    });
}
