// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-town-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-town [global options] <command>
//!   hack | append | prepend | kill | rename-branch | ship | sync
//!   new-pull-request | repo | switch | prune-branches
//!   continue | abort | skip | undo | status
//!   config | completions | version | aliases
//! ```

pub mod config;
pub mod global;
pub mod workflow;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use crate::cli::config::{AliasesArgs, CompletionsArgs, ConfigArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::workflow::{
    NewBranchArgs, RenameBranchArgs, ShipArgs, SyncArgs, TargetBranchArgs,
};

/// Git Town - Rust Port
///
/// High-level command-line interface for Git: generic, high-level Git
/// workflows for feature branches.
#[derive(Debug, Parser)]
#[command(
    name = "git-town",
    author,
    version,
    about = "High-level command-line interface for Git",
    long_about = "git-town-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Git Town makes Git more efficient, especially for large teams:\n\
                  it automates the branching workflow around feature branches,\n\
                  keeps them in sync with their parents and with origin, and\n\
                  cleans up after shipping. Interrupted commands resume with\n\
                  `git-town continue`, roll back with `git-town abort` or\n\
                  `git-town undo`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates a new feature branch off the main branch.
    Hack(NewBranchArgs),

    /// Creates a new feature branch as a child of the current branch.
    Append(NewBranchArgs),

    /// Creates a new feature branch between the current branch and its parent.
    Prepend(NewBranchArgs),

    /// Removes a feature branch locally and on origin.
    Kill(TargetBranchArgs),

    /// Renames a branch locally and on origin, updating the lineage.
    #[command(name = "rename-branch")]
    RenameBranch(RenameBranchArgs),

    /// Ships a finished feature branch into its parent.
    Ship(ShipArgs),

    /// Updates the current branch with all relevant changes.
    Sync(SyncArgs),

    /// Creates a new proposal (pull request) for the current branch.
    #[command(name = "new-pull-request")]
    NewPullRequest,

    /// Opens the repository homepage in the browser.
    Repo,

    /// Switches to another local branch.
    Switch,

    /// Deletes local branches whose tracking branch is gone.
    #[command(name = "prune-branches")]
    PruneBranches,

    /// Resumes the interrupted command after conflicts are resolved.
    Continue,

    /// Aborts the interrupted command, restoring the branch iteration start.
    Abort,

    /// Resumes the interrupted command, skipping the current branch.
    Skip,

    /// Undoes the most recently completed command.
    Undo,

    /// Shows whether an interrupted command awaits recovery.
    Status,

    /// Displays or updates the git-town configuration.
    Config(ConfigArgs),

    /// Generates shell completion scripts.
    Completions(CompletionsArgs),

    /// Displays the version.
    Version,

    /// Adds or removes the `git <command>` aliases.
    Aliases(AliasesArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
