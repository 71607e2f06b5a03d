// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The persisted state of an in-progress command.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::git::BranchName;
use crate::step::Step;

/// Schema version of the serialized runstate. Bump on breaking changes;
/// loading a different version refuses to resume.
pub const RUNSTATE_VERSION: u32 = 1;

/// Details about where a run was interrupted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfinishedDetails {
    /// The branch the run stopped on.
    pub branch: BranchName,
    /// Seconds since the epoch at interruption time.
    pub timestamp: u64,
    /// Whether `git-town continue` can resume this run.
    pub can_continue: bool,
}

/// The full state of one command execution, persisted while interrupted and
/// after completion (for `undo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Schema version of this record.
    pub version: u32,
    /// The user-level command name, for display on resume.
    pub command: String,
    /// Whether this state executes an abort continuation.
    pub is_abort: bool,
    /// Whether this state executes an undo continuation.
    pub is_undo: bool,
    /// Steps still to execute; the head is next.
    pub run_steps: VecDeque<Step>,
    /// Inverse steps rolling back the completed work; the head is the most
    /// recent inverse.
    pub undo_steps: VecDeque<Step>,
    /// Steps to execute if the user aborts after a conflict.
    pub abort_steps: Vec<Step>,
    /// Present while the run is interrupted.
    pub unfinished: Option<UnfinishedDetails>,
}

impl RunState {
    /// A fresh runstate for the given command and step list.
    #[must_use]
    pub fn new(command: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            version: RUNSTATE_VERSION,
            command: command.into(),
            is_abort: false,
            is_undo: false,
            run_steps: steps.into(),
            undo_steps: VecDeque::new(),
            abort_steps: Vec::new(),
            unfinished: None,
        }
    }

    /// Whether this run was interrupted and awaits a recovery command.
    #[must_use]
    pub fn is_unfinished(&self) -> bool {
        self.unfinished.is_some()
    }

    /// Records the interruption point.
    pub fn mark_unfinished(&mut self, branch: BranchName, can_continue: bool) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.unfinished = Some(UnfinishedDetails {
            branch,
            timestamp,
            can_continue,
        });
    }

    /// Marks the run as finished: nothing left to execute, nothing
    /// interrupted, only the undo record remains.
    pub fn mark_finished(&mut self) {
        self.run_steps.clear();
        self.abort_steps.clear();
        self.unfinished = None;
    }

    /// Turns this state into the abort continuation: execute the recorded
    /// abort steps, then stop.
    #[must_use]
    pub fn for_abort(mut self) -> Self {
        self.run_steps = std::mem::take(&mut self.abort_steps).into();
        self.undo_steps.clear();
        self.is_abort = true;
        self.unfinished = None;
        self
    }

    /// Turns this state into the undo continuation: execute the recorded
    /// inverse steps, then stop.
    #[must_use]
    pub fn for_undo(mut self) -> Self {
        self.run_steps = std::mem::take(&mut self.undo_steps);
        self.abort_steps.clear();
        self.is_undo = true;
        self.unfinished = None;
        self
    }

    /// Turns this state into the skip continuation: clean up the failed
    /// operation with the abort steps, then drop all remaining steps of the
    /// current branch block (through the next sentinel).
    #[must_use]
    pub fn for_skip(mut self) -> Self {
        let mut resumed: VecDeque<Step> =
            std::mem::take(&mut self.abort_steps).into();
        while let Some(step) = self.run_steps.pop_front() {
            if step == Step::SkipCurrentBranch {
                break;
            }
        }
        resumed.extend(std::mem::take(&mut self.run_steps));
        self.run_steps = resumed;
        self.unfinished = None;
        self
    }
}
