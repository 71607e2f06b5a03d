// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `config` command family, plus `aliases`.

use super::Workspace;
use crate::cli::config::{AliasesArgs, ConfigArgs, ConfigSubcommand, PerennialSubcommand};
use crate::config::{format_bool, parse_bool};
use crate::error::{GitError, Result};
use crate::git::BranchName;
use crate::prompt::Prompter;
use crate::validate::Validator;

/// Main handler for the `config` command.
///
/// # Errors
///
/// Fails on invalid values or config access errors.
pub fn run_config_command(
    args: &ConfigArgs,
    ws: &Workspace,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    match &args.subcommand {
        None => print_config(ws),
        Some(ConfigSubcommand::MainBranch { branch }) => match branch {
            Some(name) => set_main_branch(ws, name),
            None => {
                println!("{}", setting(ws.config.main_branch().map(|b| b.to_string())));
                Ok(())
            }
        },
        Some(ConfigSubcommand::PerennialBranches { subcommand }) => match subcommand {
            Some(PerennialSubcommand::Update) => {
                Validator::new(&ws.backend, &ws.config, prompter).update_perennial_branches()?;
                Ok(())
            }
            None => {
                println!("{}", join_branches(&ws.config.perennial_branches()));
                Ok(())
            }
        },
        Some(ConfigSubcommand::PushHook { global, value }) => match value {
            Some(text) => {
                let value = parse_bool(text, "push-hook")?;
                Ok(ws.config.set_push_hook(value, *global)?)
            }
            None => {
                let value = if *global {
                    ws.config.push_hook_global()
                } else {
                    ws.config.push_hook()
                };
                println!("{}", format_bool(value));
                Ok(())
            }
        },
        Some(ConfigSubcommand::Offline { value }) => match value {
            Some(text) => {
                let value = parse_bool(text, "offline")?;
                Ok(ws.config.set_offline(value)?)
            }
            None => {
                println!("{}", format_bool(ws.config.offline()));
                Ok(())
            }
        },
        Some(ConfigSubcommand::SyncStrategy { value }) => match value {
            Some(text) => {
                let strategy = text.parse()?;
                Ok(ws.config.set_sync_strategy(strategy)?)
            }
            None => {
                println!("{}", ws.config.sync_strategy());
                Ok(())
            }
        },
        Some(ConfigSubcommand::Reset) => Ok(ws.config.reset()?),
    }
}

fn print_config(ws: &Workspace) -> Result<()> {
    println!("Branches:");
    println!(
        "  main branch: {}",
        setting(ws.config.main_branch().map(|b| b.to_string()))
    );
    println!(
        "  perennial branches: {}",
        join_branches(&ws.config.perennial_branches())
    );
    println!();
    println!("Configuration:");
    println!("  offline: {}", format_bool(ws.config.offline()));
    println!("  push-hook: {}", format_bool(ws.config.push_hook()));
    println!("  sync strategy: {}", ws.config.sync_strategy());
    println!(
        "  sync perennial strategy: {}",
        ws.config.sync_perennial_strategy()
    );
    println!(
        "  ship deletes the remote branch: {}",
        format_bool(ws.config.ship_delete_remote_branch())
    );
    let lineage = ws.config.lineage();
    if !lineage.is_empty() {
        println!();
        println!("Branch Lineage:");
        for (child, parent) in lineage.entries() {
            println!("  {child} -> {parent}");
        }
    }
    Ok(())
}

fn set_main_branch(ws: &Workspace, name: &str) -> Result<()> {
    let branch = BranchName::new(name);
    if !ws.backend.has_local_branch(&branch)? {
        return Err(GitError::BranchNotFound {
            branch: branch.to_string(),
        }
        .into());
    }
    Ok(ws.config.set_main_branch(&branch)?)
}

fn setting(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(not set)".to_string())
}

fn join_branches(branches: &[BranchName]) -> String {
    if branches.is_empty() {
        return "(not set)".to_string();
    }
    branches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The workflow commands that get `git <command>` aliases.
const ALIASED_COMMANDS: &[&str] = &[
    "append",
    "hack",
    "kill",
    "new-pull-request",
    "prepend",
    "prune-branches",
    "rename-branch",
    "repo",
    "ship",
    "sync",
    "undo",
];

/// Adds or removes the global `git <command>` aliases.
///
/// # Errors
///
/// Fails on invalid values or config access errors.
pub fn run_aliases_command(args: &AliasesArgs, ws: &Workspace) -> Result<()> {
    let enable = parse_bool(&args.state, "aliases")?;
    for command in ALIASED_COMMANDS {
        let key = format!("alias.{command}");
        if enable {
            ws.backend
                .set_config_global(&key, &format!("town {command}"))?;
        } else {
            ws.backend.unset_config_global(&key)?;
        }
    }
    Ok(())
}
