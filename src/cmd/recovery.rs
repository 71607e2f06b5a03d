// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The recovery commands: `continue`, `abort`, `skip`, `undo`, `status`.

use super::Workspace;
use crate::error::{Result, RunstateError, bail_out};
use crate::runner::{Outcome, RunState};

/// Resumes the interrupted command after the user resolved all conflicts.
///
/// # Errors
///
/// Fails when nothing is interrupted or conflicts remain unresolved.
pub async fn run_continue_command(ws: &Workspace) -> Result<Outcome> {
    let state = load_unfinished(ws, "continue")?;
    if ws.backend.has_conflicts()? {
        return Err(bail_out(
            "please resolve the conflicts and stage them with \"git add\" before continuing",
        )
        .into());
    }
    let mut state = state;
    state.unfinished = None;
    ws.execute_state(state, false).await
}

/// Aborts the interrupted command, restoring the state at the start of the
/// conflicted branch iteration.
///
/// # Errors
///
/// Fails when nothing is interrupted.
pub async fn run_abort_command(ws: &Workspace) -> Result<Outcome> {
    let state = load_unfinished(ws, "abort")?;
    ws.execute_state(state.for_abort(), false).await
}

/// Resumes the interrupted command, skipping the rest of the conflicted
/// branch iteration.
///
/// # Errors
///
/// Fails when nothing is interrupted.
pub async fn run_skip_command(ws: &Workspace) -> Result<Outcome> {
    let state = load_unfinished(ws, "skip")?;
    ws.execute_state(state.for_skip(), false).await
}

/// Undoes the most recently completed command.
///
/// # Errors
///
/// Fails when nothing can be undone, or when an interrupted run must be
/// continued or aborted first.
pub async fn run_undo_command(ws: &Workspace) -> Result<Outcome> {
    let Some(state) = ws.store().load()? else {
        return Err(RunstateError::NothingToDo { command: "undo" }.into());
    };
    if state.is_unfinished() {
        return Err(bail_out(format!(
            "cannot undo: `git-town {}` is still in progress; \
             run \"git-town continue\" or \"git-town abort\" first",
            state.command
        ))
        .into());
    }
    if state.undo_steps.is_empty() {
        return Err(RunstateError::NothingToDo { command: "undo" }.into());
    }
    ws.execute_state(state.for_undo(), false).await
}

/// Prints whether an interrupted command awaits recovery.
///
/// # Errors
///
/// Fails only on runstate access errors.
pub fn run_status_command(ws: &Workspace) -> Result<()> {
    match ws.store().load()? {
        Some(state) => match &state.unfinished {
            Some(details) => {
                println!(
                    "`git-town {}` is unfinished, interrupted on branch {:?}",
                    state.command, details.branch
                );
                if details.can_continue {
                    println!("resume it with \"git-town continue\"");
                }
                println!(
                    "or run \"git-town abort\" / \"git-town skip\" / \"git-town undo\""
                );
            }
            None => {
                println!(
                    "`git-town {}` finished; \"git-town undo\" can roll it back",
                    state.command
                );
            }
        },
        None => println!("no unfinished command"),
    }
    Ok(())
}

fn load_unfinished(ws: &Workspace, command: &'static str) -> Result<RunState> {
    let Some(state) = ws.store().load()? else {
        return Err(RunstateError::NothingToDo { command }.into());
    };
    if !state.is_unfinished() {
        return Err(RunstateError::NothingToDo { command }.into());
    }
    Ok(state)
}
