// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `config` command family.
//!
//! ```text
//! config                          → print all settings
//! config main-branch [BRANCH]     → get/set
//! config perennial-branches       → print
//! config perennial-branches update→ multi-select dialog
//! config push-hook [--global] [(yes|no)]
//! config offline [(yes|no)]
//! config sync-strategy [(merge|rebase)]
//! config reset                    → remove all git-town settings
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `config` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand; prints the whole configuration when omitted.
    #[command(subcommand)]
    pub subcommand: Option<ConfigSubcommand>,
}

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Displays or sets your main development branch.
    #[command(name = "main-branch")]
    MainBranch {
        /// The branch to use as the main branch.
        #[arg(value_name = "BRANCH")]
        branch: Option<String>,
    },

    /// Displays or updates your perennial branches.
    #[command(name = "perennial-branches")]
    PerennialBranches {
        #[command(subcommand)]
        subcommand: Option<PerennialSubcommand>,
    },

    /// Configures whether git-town runs Git's pre-push hook.
    #[command(name = "push-hook")]
    PushHook {
        /// Reads or updates the flag for all repositories on this machine.
        #[arg(long)]
        global: bool,

        /// "yes" or "no"; prints the current value when omitted.
        #[arg(value_name = "VALUE")]
        value: Option<String>,
    },

    /// Displays or sets offline mode.
    Offline {
        /// "yes" or "no"; prints the current value when omitted.
        #[arg(value_name = "VALUE")]
        value: Option<String>,
    },

    /// Displays or sets the sync strategy for feature branches.
    #[command(name = "sync-strategy")]
    SyncStrategy {
        /// "merge" or "rebase"; prints the current value when omitted.
        #[arg(value_name = "VALUE")]
        value: Option<String>,
    },

    /// Removes all git-town configuration from this repository.
    Reset,
}

/// Perennial-branches subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PerennialSubcommand {
    /// Prompts to update the perennial branches.
    Update,
}

/// Arguments for the `aliases` command.
#[derive(Debug, Clone, Args)]
pub struct AliasesArgs {
    /// "true" adds the git aliases, "false" removes them.
    #[arg(value_name = "STATE")]
    pub state: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// The shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}
