// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::{BranchKind, Config, Lineage, SyncStrategy, parse_bool};
use crate::git::BranchName;

fn init_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    run_git(&["init", "--quiet", "-b", "main"], temp.path());
    run_git(&["config", "user.email", "test@example.com"], temp.path());
    run_git(&["config", "user.name", "Test"], temp.path());
    temp
}

fn run_git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_main_branch_roundtrip() {
    let repo = init_repo();
    let config = Config::new(repo.path());

    assert_eq!(config.main_branch(), None);
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");
    assert_eq!(config.main_branch(), Some(BranchName::new("main")));

    // a fresh store re-reads from git config
    let fresh = Config::new(repo.path());
    assert_eq!(fresh.main_branch(), Some(BranchName::new("main")));
}

#[test]
fn test_perennial_branches_space_separated() {
    let repo = init_repo();
    let config = Config::new(repo.path());

    assert!(config.perennial_branches().is_empty());
    config
        .set_perennial_branches(&[BranchName::new("production"), BranchName::new("staging")])
        .expect("set perennials");

    let fresh = Config::new(repo.path());
    assert_eq!(
        fresh.perennial_branches(),
        vec![BranchName::new("production"), BranchName::new("staging")]
    );
    assert!(fresh.is_perennial_branch(&BranchName::new("staging")));
}

#[test]
fn test_branch_kind_derivation() {
    let repo = init_repo();
    let config = Config::new(repo.path());
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");
    config
        .set_perennial_branches(&[BranchName::new("production")])
        .expect("set perennials");

    assert_eq!(config.branch_kind(&BranchName::new("main")), BranchKind::Main);
    assert_eq!(
        config.branch_kind(&BranchName::new("production")),
        BranchKind::Perennial
    );
    assert_eq!(
        config.branch_kind(&BranchName::new("feature")),
        BranchKind::Feature
    );
    assert!(config.is_feature_branch(&BranchName::new("feature")));
}

#[test]
fn test_lineage_roundtrip_through_git_config() {
    let repo = init_repo();
    let config = Config::new(repo.path());

    config
        .set_parent(&BranchName::new("feature"), &BranchName::new("main"))
        .expect("set parent");
    config
        .set_parent(&BranchName::new("child"), &BranchName::new("feature"))
        .expect("set parent");

    let fresh = Config::new(repo.path());
    let lineage = fresh.lineage();
    assert_eq!(
        lineage.parent(&BranchName::new("child")),
        Some(&BranchName::new("feature"))
    );
    assert_eq!(
        lineage.ancestors(&BranchName::new("child")),
        vec![BranchName::new("main"), BranchName::new("feature")]
    );

    fresh
        .remove_parent_entry(&BranchName::new("child"))
        .expect("remove");
    assert_eq!(fresh.parent_of(&BranchName::new("child")), None);
}

#[test]
fn test_lineage_rejects_cycles() {
    let mut lineage = Lineage::new();
    lineage
        .set_parent(BranchName::new("b"), BranchName::new("a"))
        .expect("a <- b");
    lineage
        .set_parent(BranchName::new("c"), BranchName::new("b"))
        .expect("b <- c");

    let err = lineage.set_parent(BranchName::new("a"), BranchName::new("c"));
    assert!(err.is_err(), "a <- c closes a cycle");
    let err = lineage.set_parent(BranchName::new("a"), BranchName::new("a"));
    assert!(err.is_err(), "self-parent is a cycle");
}

#[test]
fn test_lineage_children() {
    let mut lineage = Lineage::new();
    lineage
        .set_parent(BranchName::new("b"), BranchName::new("a"))
        .expect("edge");
    lineage
        .set_parent(BranchName::new("c"), BranchName::new("a"))
        .expect("edge");
    lineage
        .set_parent(BranchName::new("d"), BranchName::new("b"))
        .expect("edge");

    assert_eq!(
        lineage.children(&BranchName::new("a")),
        vec![BranchName::new("b"), BranchName::new("c")]
    );
    assert_eq!(lineage.children(&BranchName::new("d")), Vec::new());
}

#[test]
fn test_toggles_and_strategies_default() {
    let repo = init_repo();
    let config = Config::new(repo.path());

    assert!(config.push_hook());
    assert!(config.ship_delete_remote_branch());
    assert!(!config.offline());
    assert_eq!(config.sync_strategy(), SyncStrategy::Merge);
    assert_eq!(config.sync_perennial_strategy(), SyncStrategy::Rebase);

    config.set_push_hook(false, false).expect("set push hook");
    assert!(!config.push_hook());
    config
        .set_sync_strategy(SyncStrategy::Rebase)
        .expect("set strategy");
    assert_eq!(config.sync_strategy(), SyncStrategy::Rebase);
}

#[test]
fn test_parse_bool_spellings() {
    for text in ["yes", "true", "on", "1", "Yes", "TRUE"] {
        assert_eq!(parse_bool(text, "k").expect("parse"), true, "{text}");
    }
    for text in ["no", "false", "off", "0", "No"] {
        assert_eq!(parse_bool(text, "k").expect("parse"), false, "{text}");
    }
    assert!(parse_bool("maybe", "k").is_err());
}

#[test]
fn test_reset_removes_all_keys() {
    let repo = init_repo();
    let config = Config::new(repo.path());
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");
    config
        .set_parent(&BranchName::new("feature"), &BranchName::new("main"))
        .expect("set parent");

    config.reset().expect("reset");

    let fresh = Config::new(repo.path());
    assert_eq!(fresh.main_branch(), None);
    assert!(fresh.lineage().is_empty());
}
