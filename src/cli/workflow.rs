// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the branching workflow commands.
//!
//! ```text
//! hack NEW          append NEW         prepend NEW
//! kill [BRANCH]     rename-branch OLD NEW
//! ship [BRANCH] [-m MSG]
//! sync [--all] [--dry-run]
//! ```

use clap::Args;

/// Arguments for commands that create a new branch.
#[derive(Debug, Clone, Args)]
pub struct NewBranchArgs {
    /// Name of the branch to create.
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

/// Arguments for commands that target an existing branch, defaulting to the
/// current one.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetBranchArgs {
    /// Branch to operate on (defaults to the current branch).
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for `rename-branch`.
#[derive(Debug, Clone, Args)]
pub struct RenameBranchArgs {
    /// Current name of the branch.
    #[arg(value_name = "OLD")]
    pub old: String,

    /// New name of the branch.
    #[arg(value_name = "NEW")]
    pub new: String,
}

/// Arguments for `ship`.
#[derive(Debug, Clone, Default, Args)]
pub struct ShipArgs {
    /// Branch to ship (defaults to the current branch).
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Commit message for the squashed commit.
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,
}

/// Arguments for `sync`.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Syncs all local branches instead of only the current one.
    #[arg(long)]
    pub all: bool,

    /// Prints the steps without executing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
