// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::{Validator, ensure_is_feature_branch, ensure_no_unfinished_run};
use crate::config::Config;
use crate::git::{Backend, BranchName};
use crate::prompt::ScriptedPrompter;
use crate::runner::{RunState, RunstateStore};
use crate::step::Step;

fn init_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    run_git(&["init", "--quiet", "-b", "main"], temp.path());
    run_git(&["config", "user.email", "test@example.com"], temp.path());
    run_git(&["config", "user.name", "Test"], temp.path());
    run_git(
        &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
        temp.path(),
    );
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
fn test_unfinished_runstate_blocks_new_commands() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = RunstateStore::at_path(temp.path().join("runstate.json"));

    // nothing persisted: fine
    ensure_no_unfinished_run(&store).expect("no runstate");

    // a finished state (undo input) does not block
    let mut finished = RunState::new("hack", vec![]);
    finished.undo_steps.push_front(Step::Fetch);
    store.save(&finished).expect("save");
    ensure_no_unfinished_run(&store).expect("finished state does not block");

    // an unfinished state blocks
    let mut unfinished = RunState::new("sync", vec![Step::Fetch]);
    unfinished.mark_unfinished(BranchName::new("feature"), true);
    store.save(&unfinished).expect("save");
    let err = ensure_no_unfinished_run(&store);
    assert!(err.is_err());
    let text = err.expect_err("blocked").to_string();
    assert!(text.contains("sync"), "names the command: {text}");
}

#[test]
fn test_ensure_main_branch_prompts_once_and_persists() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    let config = Config::new(repo.path());
    let mut prompter = ScriptedPrompter::new(["main"]);
    let mut validator = Validator::new(&backend, &config, &mut prompter);

    let main = validator.ensure_main_branch().expect("main branch");
    assert_eq!(main, BranchName::new("main"));
    assert_eq!(config.main_branch(), Some(BranchName::new("main")));

    // second call answers from config, no prompt left to consume
    let main = validator.ensure_main_branch().expect("main branch");
    assert_eq!(main, BranchName::new("main"));
}

#[test]
fn test_ensure_knows_parents_walks_to_root() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    backend
        .create_branch(&BranchName::new("a"), "main")
        .expect("create");
    backend
        .create_branch(&BranchName::new("b"), "main")
        .expect("create");
    let config = Config::new(repo.path());
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");

    // b's parent is a (first answer), a's parent is main (second answer)
    let mut prompter = ScriptedPrompter::new(["a", "main"]);
    let mut validator = Validator::new(&backend, &config, &mut prompter);
    validator
        .ensure_knows_parents(&BranchName::new("b"))
        .expect("parents");

    assert_eq!(
        config.parent_of(&BranchName::new("b")),
        Some(BranchName::new("a"))
    );
    assert_eq!(
        config.parent_of(&BranchName::new("a")),
        Some(BranchName::new("main"))
    );
}

#[test]
fn test_update_perennial_branches_via_multi_select() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    backend
        .create_branch(&BranchName::new("production"), "main")
        .expect("create");
    backend
        .create_branch(&BranchName::new("staging"), "main")
        .expect("create");
    let config = Config::new(repo.path());
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");

    let mut prompter = ScriptedPrompter::new(["production staging"]);
    let mut validator = Validator::new(&backend, &config, &mut prompter);
    validator
        .update_perennial_branches()
        .expect("update perennials");

    assert_eq!(
        config.perennial_branches(),
        vec![BranchName::new("production"), BranchName::new("staging")]
    );
}

#[test]
fn test_ensure_is_feature_branch() {
    let repo = init_repo();
    let config = Config::new(repo.path());
    config
        .set_main_branch(&BranchName::new("main"))
        .expect("set main");

    assert!(ensure_is_feature_branch(&config, &BranchName::new("feature"), "ship").is_ok());
    assert!(ensure_is_feature_branch(&config, &BranchName::new("main"), "ship").is_err());
}
