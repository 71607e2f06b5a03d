// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The forge-facing commands: `new-pull-request` and `repo`.

use super::Workspace;
use crate::error::{ForgeError, Result};
use crate::plan::{StepList, sync_branch_steps};
use crate::prompt::Prompter;
use crate::runner::Outcome;
use crate::step::Step;
use crate::validate::{Validator, ensure_no_unfinished_run};

/// Syncs the current branch, then opens the forge's new-proposal form.
///
/// # Errors
///
/// Fails with `ForgeError::NoConnector` when the repository has no
/// recognized hosting service.
pub async fn run_new_pull_request_command(
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    ensure_no_unfinished_run(&ws.store())?;
    if crate::forge::detect(&ws.backend, &ws.config)?.is_none() {
        return Err(ForgeError::NoConnector.into());
    }
    let current = ws.backend.current_branch()?;
    Validator::new(&ws.backend, &ws.config, prompter).ensure_knows_parents(&current)?;

    let mut list = StepList::new();
    if !ws.config.offline() && ws.backend.has_origin() {
        list.push(Step::Fetch);
    }
    sync_branch_steps(&mut list, &current, &ws.backend, &ws.config)?;
    list.push(Step::CreateProposal { branch: current });
    ws.execute_new("new-pull-request", list.into_steps(), false)
        .await
}

/// Opens the repository homepage in the browser.
///
/// # Errors
///
/// Fails with `ForgeError::NoConnector` when the repository has no
/// recognized hosting service.
pub fn run_repo_command(ws: &Workspace) -> Result<()> {
    let connector =
        crate::forge::detect(&ws.backend, &ws.config)?.ok_or(ForgeError::NoConnector)?;
    ws.backend.open_browser(&connector.repo_url());
    Ok(())
}
