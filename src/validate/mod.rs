// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pre-flight checks and prompt-driven configuration completion.
//!
//! ```text
//! before a step list is built:
//!   - the cwd must be inside a git repository
//!   - no unfinished runstate may exist
//!   - the main branch must be known        (prompt: single-select)
//!   - parents up the lineage must be known (prompt: walk towards a root)
//! ```

use crate::config::Config;
use crate::error::{TownResult, ValidateError};
use crate::git::{Backend, BranchName};
use crate::prompt::Prompter;
use crate::runner::RunstateStore;

/// Refuses to start a new command while an unfinished run exists.
///
/// # Errors
///
/// Returns `ValidateError::UnfinishedRun` naming the interrupted command.
pub fn ensure_no_unfinished_run(store: &RunstateStore) -> TownResult<()> {
    if let Some(state) = store.load()?
        && state.is_unfinished()
    {
        return Err(ValidateError::UnfinishedRun {
            command: state.command,
        }
        .into());
    }
    Ok(())
}

/// Requires a clean working tree.
///
/// # Errors
///
/// Returns `ValidateError::DirtyWorkspace` when changes are open.
pub fn ensure_clean_workspace(backend: &Backend) -> TownResult<()> {
    if backend.has_open_changes()? {
        return Err(ValidateError::DirtyWorkspace.into());
    }
    Ok(())
}

/// Requires that the branch exists locally.
///
/// # Errors
///
/// Returns `GitError::BranchNotFound` otherwise.
pub fn ensure_has_branch(backend: &Backend, branch: &BranchName) -> TownResult<()> {
    if !backend.has_local_branch(branch)? {
        return Err(crate::error::GitError::BranchNotFound {
            branch: branch.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Requires that the branch is a feature branch.
///
/// # Errors
///
/// Returns `ValidateError::NotAFeatureBranch` otherwise.
pub fn ensure_is_feature_branch(
    config: &Config,
    branch: &BranchName,
    command: &'static str,
) -> TownResult<()> {
    if !config.is_feature_branch(branch) {
        return Err(ValidateError::NotAFeatureBranch {
            branch: branch.to_string(),
            command,
        }
        .into());
    }
    Ok(())
}

/// Fills in missing configuration by asking the user.
pub struct Validator<'a> {
    backend: &'a Backend,
    config: &'a Config,
    prompter: &'a mut dyn Prompter,
}

impl<'a> Validator<'a> {
    /// Creates a validator over the given collaborators.
    pub fn new(
        backend: &'a Backend,
        config: &'a Config,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            backend,
            config,
            prompter,
        }
    }

    /// The configured main branch, prompting for it if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is aborted or config cannot be written.
    pub fn ensure_main_branch(&mut self) -> TownResult<BranchName> {
        if let Some(main) = self.config.main_branch() {
            return Ok(main);
        }
        let branches: Vec<String> = self
            .backend
            .local_branches()?
            .iter()
            .map(ToString::to_string)
            .collect();
        let default = branches
            .iter()
            .position(|name| name == "main" || name == "master");
        let choice = self.prompter.single_select(
            "Please specify the main development branch:",
            &branches,
            default,
        )?;
        let main = BranchName::new(choice);
        self.config.set_main_branch(&main)?;
        Ok(main)
    }

    /// Ensures every branch from `branch` up the lineage has a known parent,
    /// prompting branch by branch towards a root.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is aborted or config cannot be written.
    pub fn ensure_knows_parents(&mut self, branch: &BranchName) -> TownResult<()> {
        let main = self.ensure_main_branch()?;
        let mut current = branch.clone();
        loop {
            if !self.config.is_feature_branch(&current) {
                return Ok(());
            }
            if let Some(parent) = self.config.parent_of(&current) {
                current = parent;
                continue;
            }
            let options: Vec<String> = self
                .backend
                .local_branches()?
                .iter()
                .filter(|candidate| **candidate != current)
                .map(ToString::to_string)
                .collect();
            let default = options.iter().position(|name| *name == main.to_string());
            let choice = self.prompter.single_select(
                &format!("Please specify the parent branch of {current:?}:"),
                &options,
                default,
            )?;
            let parent = BranchName::new(choice);
            self.config.set_parent(&current, &parent)?;
            current = parent;
        }
    }

    /// Lets the user update the perennial branch set via multi-select.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is aborted or config cannot be written.
    pub fn update_perennial_branches(&mut self) -> TownResult<()> {
        let main = self.ensure_main_branch()?;
        let options: Vec<String> = self
            .backend
            .local_branches()?
            .iter()
            .filter(|candidate| **candidate != main)
            .map(ToString::to_string)
            .collect();
        let defaults: Vec<String> = self
            .config
            .perennial_branches()
            .iter()
            .map(ToString::to_string)
            .collect();
        let selection = self.prompter.multi_select(
            "Please specify the perennial branches:",
            &options,
            &defaults,
        )?;
        let branches: Vec<BranchName> = selection.into_iter().map(BranchName::new).collect();
        self.config.set_perennial_branches(&branches)
    }
}

#[cfg(test)]
mod tests;
