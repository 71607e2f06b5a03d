// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `switch` command: interactive branch checkout.

use super::Workspace;
use crate::error::Result;
use crate::git::BranchName;
use crate::prompt::Prompter;

/// Lets the user pick a local branch and checks it out.
///
/// # Errors
///
/// Fails if the prompt is aborted or the checkout fails.
pub fn run_switch_command(ws: &Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    let current = ws.backend.current_branch()?;
    let branches: Vec<String> = ws
        .backend
        .local_branches()?
        .iter()
        .map(ToString::to_string)
        .collect();
    let default = branches.iter().position(|name| *name == current.to_string());
    let choice = prompter.single_select("Please select a branch:", &branches, default)?;
    let target = BranchName::new(choice);
    if target != current {
        ws.backend.checkout(&target)?;
    }
    Ok(())
}
