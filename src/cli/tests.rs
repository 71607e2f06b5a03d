// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command, parse_from};
use clap::CommandFactory;

#[test]
fn test_cli_structure_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_hack_with_branch() {
    let cli = parse_from(["git-town", "hack", "feature-x"]);
    match cli.command {
        Some(Command::Hack(args)) => assert_eq!(args.branch, "feature-x"),
        other => panic!("expected hack, got {other:?}"),
    }
}

#[test]
fn test_parse_sync_flags() {
    let cli = parse_from(["git-town", "sync", "--all", "--dry-run"]);
    match cli.command {
        Some(Command::Sync(args)) => {
            assert!(args.all);
            assert!(args.dry_run);
        }
        other => panic!("expected sync, got {other:?}"),
    }
}

#[test]
fn test_parse_ship_with_message() {
    let cli = parse_from(["git-town", "ship", "feature-x", "-m", "done"]);
    match cli.command {
        Some(Command::Ship(args)) => {
            assert_eq!(args.branch.as_deref(), Some("feature-x"));
            assert_eq!(args.message.as_deref(), Some("done"));
        }
        other => panic!("expected ship, got {other:?}"),
    }
}

#[test]
fn test_parse_rename_branch() {
    let cli = parse_from(["git-town", "rename-branch", "old", "new"]);
    match cli.command {
        Some(Command::RenameBranch(args)) => {
            assert_eq!(args.old, "old");
            assert_eq!(args.new, "new");
        }
        other => panic!("expected rename-branch, got {other:?}"),
    }
}

#[test]
fn test_debug_flag_is_global() {
    let cli = parse_from(["git-town", "sync", "--debug"]);
    assert!(cli.global.debug);
    let cli = parse_from(["git-town", "--debug", "status"]);
    assert!(cli.global.debug);
}

#[test]
fn test_parse_config_push_hook() {
    use super::config::ConfigSubcommand;
    let cli = parse_from(["git-town", "config", "push-hook", "--global", "no"]);
    match cli.command {
        Some(Command::Config(args)) => match args.subcommand {
            Some(ConfigSubcommand::PushHook { global, value }) => {
                assert!(global);
                assert_eq!(value.as_deref(), Some("no"));
            }
            other => panic!("expected push-hook, got {other:?}"),
        },
        other => panic!("expected config, got {other:?}"),
    }
}

#[test]
fn test_parse_kill_defaults_to_current_branch() {
    let cli = parse_from(["git-town", "kill"]);
    match cli.command {
        Some(Command::Kill(args)) => assert_eq!(args.branch, None),
        other => panic!("expected kill, got {other:?}"),
    }
}
