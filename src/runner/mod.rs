// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The runner: a durable state machine executing step lists.
//!
//! ```text
//! execute(RunState)
//!   loop:
//!     pop step
//!     compute undo (pre-state)
//!     run step
//!       ok        -> prepend undo, continue
//!       conflict  -> prepend continue-steps, persist, Paused
//!       transient -> same as conflict (user re-runs `continue`)
//!       fatal     -> discard runstate, propagate
//!   done:
//!     abort/undo run  -> delete runstate
//!     normal run      -> persist finished state (input for `undo`)
//! ```
//!
//! Steps execute strictly serially in this process; a cancellation token is
//! checked between steps and stops the run without persisting.

pub mod persist;
pub mod state;

pub use persist::RunstateStore;
pub use state::{RunState, UnfinishedDetails};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{TownError, TownResult, bail_out};
use crate::step::{RunContext, Step};

/// How one execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All steps ran; the command is done.
    Completed,
    /// The run paused on a conflict or transient failure; a runstate is on
    /// disk and the user was told how to recover.
    Paused,
}

/// Failure classes the runner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    /// Merge/rebase/stash-pop conflict; user resolves, then continues.
    Conflict,
    /// Transient external failure (network); user re-runs `continue`.
    Retryable,
    /// Everything else; no auto-retry.
    Fatal,
}

/// Executes step lists against one repository.
pub struct Runner<'a> {
    ctx: RunContext<'a>,
    store: RunstateStore,
    cancel: CancellationToken,
    dry_run: bool,
}

impl<'a> Runner<'a> {
    /// Creates a runner.
    #[must_use]
    pub fn new(ctx: RunContext<'a>, store: RunstateStore) -> Self {
        Self {
            ctx,
            store,
            cancel: CancellationToken::new(),
            dry_run: false,
        }
    }

    /// Uses the given cancellation token (Ctrl-C wiring).
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Print the steps instead of executing them.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Executes the runstate to completion or interruption.
    ///
    /// # Errors
    ///
    /// Returns the original step error on fatal failures, after discarding
    /// the runstate.
    pub async fn execute(&self, mut state: RunState) -> TownResult<Outcome> {
        if self.dry_run {
            for step in &state.run_steps {
                println!("would {step}");
            }
            return Ok(Outcome::Completed);
        }

        info!(command = %state.command, steps = state.run_steps.len(), "executing");
        // inverses prepended since the last branch-block sentinel; these are
        // what `abort` rolls back
        let mut block_undo_len = 0usize;

        while let Some(step) = state.run_steps.pop_front() {
            if self.cancel.is_cancelled() {
                // no runstate is written; scheduled-but-unattempted work is
                // lost, the user recovers via `git status`
                return Err(bail_out(format!(
                    "interrupted; run \"git status\" to see where `git-town {}` stopped",
                    state.command
                )));
            }
            if step == Step::SkipCurrentBranch {
                block_undo_len = 0;
                continue;
            }

            let undo = step.create_undo_steps(self.ctx.backend)?;
            match step.run(&self.ctx).await {
                Ok(()) => {
                    block_undo_len += undo.len();
                    for inverse in undo.into_iter().rev() {
                        state.undo_steps.push_front(inverse);
                    }
                }
                Err(err) => {
                    return self.handle_failure(state, &step, err, block_undo_len);
                }
            }
        }

        if state.is_abort || state.is_undo {
            self.store.delete()?;
        } else {
            state.mark_finished();
            self.store.save(&state)?;
        }
        info!(command = %state.command, "done");
        Ok(Outcome::Completed)
    }

    fn handle_failure(
        &self,
        mut state: RunState,
        step: &Step,
        err: TownError,
        block_undo_len: usize,
    ) -> TownResult<Outcome> {
        let kind = self.classify(step, &err);
        debug!(step = %step, ?kind, "step failed");
        if kind == FailureKind::Fatal {
            // a failing abort/undo continuation must not loop forever
            self.store.delete()?;
            return Err(err);
        }

        state.abort_steps.extend(step.create_abort_steps());
        let block_undo: Vec<Step> = state
            .undo_steps
            .iter()
            .take(block_undo_len)
            .cloned()
            .collect();
        state.abort_steps.extend(block_undo);

        for resume in step.create_continue_steps().into_iter().rev() {
            state.run_steps.push_front(resume);
        }

        let branch = self
            .ctx
            .backend
            .current_branch()
            .unwrap_or_else(|_| crate::git::BranchName::new("HEAD"));
        state.mark_unfinished(branch, true);
        self.store.save(&state)?;

        eprintln!("{err}");
        eprintln!();
        eprintln!(
            "To continue after having resolved conflicts, run \"git-town continue\"."
        );
        eprintln!("To go back to where you started, run \"git-town abort\".");
        eprintln!("To continue by skipping the current branch, run \"git-town skip\".");
        Ok(Outcome::Paused)
    }

    fn classify(&self, step: &Step, err: &TownError) -> FailureKind {
        // git is authoritative about conflicts: inspect the repository
        // rather than parsing stderr
        let in_conflict = self.ctx.backend.has_conflicts().unwrap_or(false)
            || self.ctx.backend.has_merge_in_progress()
            || self.ctx.backend.has_rebase_in_progress();
        if in_conflict {
            return FailureKind::Conflict;
        }
        if step.is_remote() && matches!(err, TownError::Git(_) | TownError::Forge(_)) {
            return FailureKind::Retryable;
        }
        FailureKind::Fatal
    }
}

#[cfg(test)]
mod tests;
