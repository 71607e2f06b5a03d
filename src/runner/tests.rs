// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::persist::RunstateStore;
use super::state::{RUNSTATE_VERSION, RunState};
use super::{Outcome, Runner};
use crate::config::Config;
use crate::git::{Backend, BranchName};
use crate::step::{RunContext, Step};

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

fn checkout_step(name: &str) -> Step {
    Step::Checkout {
        branch: BranchName::new(name),
    }
}

#[test]
fn test_runstate_roundtrips_through_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = RunstateStore::at_path(temp.path().join("runstate.json"));

    assert!(store.load().expect("load").is_none());

    let mut state = RunState::new("sync", vec![Step::Fetch, checkout_step("main")]);
    state.mark_unfinished(BranchName::new("feature"), true);
    store.save(&state).expect("save");

    let loaded = store.load().expect("load").expect("present");
    assert_eq!(loaded, state);

    store.delete().expect("delete");
    assert!(store.load().expect("load").is_none());
    store.delete().expect("deleting again is fine");
}

#[test]
fn test_runstate_with_unknown_step_refuses_to_load() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("runstate.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"version":{RUNSTATE_VERSION},"command":"sync","is_abort":false,"is_undo":false,
               "run_steps":[{{"step":"TeleportBranch"}}],"undo_steps":[],"abort_steps":[],
               "unfinished":null}}"#
        ),
    )
    .expect("write");

    let store = RunstateStore::at_path(&path);
    let result = store.load();
    assert!(result.is_err(), "unknown step tags must refuse to resume");
}

#[test]
fn test_runstate_with_wrong_version_refuses_to_load() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("runstate.json");
    std::fs::write(
        &path,
        r#"{"version":999,"command":"sync","is_abort":false,"is_undo":false,
           "run_steps":[],"undo_steps":[],"abort_steps":[],"unfinished":null}"#,
    )
    .expect("write");

    let store = RunstateStore::at_path(&path);
    assert!(store.load().is_err());
}

#[test]
fn test_for_skip_drops_through_sentinel() {
    let mut state = RunState::new(
        "sync",
        vec![
            checkout_step("a"),
            Step::SkipCurrentBranch,
            checkout_step("b"),
            Step::SkipCurrentBranch,
        ],
    );
    state.abort_steps = vec![Step::AbortMerge];

    let skipped = state.for_skip();
    let steps: Vec<Step> = skipped.run_steps.into_iter().collect();
    assert_eq!(
        steps,
        vec![
            Step::AbortMerge,
            checkout_step("b"),
            Step::SkipCurrentBranch,
        ]
    );
}

#[test]
fn test_for_abort_and_for_undo_select_their_lists() {
    let mut state = RunState::new("ship", vec![checkout_step("a")]);
    state.abort_steps = vec![Step::AbortMerge];
    state.undo_steps = vec![checkout_step("main")].into();
    state.mark_unfinished(BranchName::new("a"), true);

    let abort = state.clone().for_abort();
    assert!(abort.is_abort);
    assert!(!abort.is_unfinished());
    assert_eq!(
        abort.run_steps.clone().into_iter().collect::<Vec<_>>(),
        vec![Step::AbortMerge]
    );

    let undo = state.for_undo();
    assert!(undo.is_undo);
    assert_eq!(
        undo.run_steps.into_iter().collect::<Vec<_>>(),
        vec![checkout_step("main")]
    );
}

#[tokio::test]
async fn test_execute_records_undo_and_persists_finished_state() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    let config = Config::new(repo.path());
    let store_dir = tempfile::tempdir().expect("tempdir");
    let store = RunstateStore::at_path(store_dir.path().join("runstate.json"));

    let steps = vec![
        Step::CreateBranch {
            branch: BranchName::new("feature"),
            start_point: "main".to_string(),
        },
        checkout_step("feature"),
        Step::SetParent {
            branch: BranchName::new("feature"),
            parent: BranchName::new("main"),
        },
    ];
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, store);
    let outcome = runner
        .execute(RunState::new("hack", steps))
        .await
        .expect("execute");
    assert_eq!(outcome, Outcome::Completed);

    assert_eq!(
        backend.current_branch().expect("current"),
        BranchName::new("feature")
    );
    assert_eq!(
        config.parent_of(&BranchName::new("feature")),
        Some(BranchName::new("main"))
    );

    // the finished state carries the inverses, most recent first
    let store = RunstateStore::at_path(store_dir.path().join("runstate.json"));
    let finished = store.load().expect("load").expect("present");
    assert!(!finished.is_unfinished());
    assert!(finished.run_steps.is_empty());
    assert_eq!(
        finished.undo_steps.clone().into_iter().collect::<Vec<_>>(),
        vec![
            Step::DeleteParentBranchEntry {
                branch: BranchName::new("feature")
            },
            checkout_step("main"),
            Step::DeleteLocalBranch {
                branch: BranchName::new("feature"),
                force: true
            },
        ]
    );
}

#[tokio::test]
async fn test_execute_undo_restores_pre_command_state() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    let config = Config::new(repo.path());
    let store_dir = tempfile::tempdir().expect("tempdir");

    let steps = vec![
        Step::CreateBranch {
            branch: BranchName::new("feature"),
            start_point: "main".to_string(),
        },
        checkout_step("feature"),
        Step::SetParent {
            branch: BranchName::new("feature"),
            parent: BranchName::new("main"),
        },
    ];
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let store = RunstateStore::at_path(store_dir.path().join("runstate.json"));
    let runner = Runner::new(ctx, store);
    runner
        .execute(RunState::new("hack", steps))
        .await
        .expect("execute");

    let store = RunstateStore::at_path(store_dir.path().join("runstate.json"));
    let finished = store.load().expect("load").expect("present");
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, RunstateStore::at_path(store_dir.path().join("runstate.json")));
    let outcome = runner.execute(finished.for_undo()).await.expect("undo");
    assert_eq!(outcome, Outcome::Completed);

    assert_eq!(
        backend.current_branch().expect("current"),
        BranchName::new("main")
    );
    assert!(
        !backend
            .has_local_branch(&BranchName::new("feature"))
            .expect("has branch")
    );
    assert_eq!(config.parent_of(&BranchName::new("feature")), None);

    // undo consumed the runstate
    let store = RunstateStore::at_path(store_dir.path().join("runstate.json"));
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn test_execute_pauses_on_merge_conflict_with_continue_step() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    let config = Config::new(repo.path());

    // diverging change on main and feature
    std::fs::write(repo.path().join("file.txt"), "main content").expect("write");
    run_git(&["add", "-A"], repo.path());
    run_git(&["commit", "-m", "main change", "--quiet"], repo.path());
    backend
        .create_branch(&BranchName::new("feature"), "main~1")
        .expect("create");
    backend
        .checkout(&BranchName::new("feature"))
        .expect("checkout");
    std::fs::write(repo.path().join("file.txt"), "feature content").expect("write");
    run_git(&["add", "-A"], repo.path());
    run_git(&["commit", "-m", "feature change", "--quiet"], repo.path());

    let store_dir = tempfile::tempdir().expect("tempdir");
    let store_path = store_dir.path().join("runstate.json");
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, RunstateStore::at_path(&store_path));
    let outcome = runner
        .execute(RunState::new(
            "sync",
            vec![
                Step::Merge {
                    branch: "main".to_string(),
                },
                Step::SkipCurrentBranch,
            ],
        ))
        .await
        .expect("execute");
    assert_eq!(outcome, Outcome::Paused);

    let paused = RunstateStore::at_path(&store_path)
        .load()
        .expect("load")
        .expect("present");
    assert!(paused.is_unfinished());
    assert_eq!(paused.run_steps.front(), Some(&Step::ContinueMerge));
    assert_eq!(paused.abort_steps, vec![Step::AbortMerge]);

    // resolve the conflict, then continue
    std::fs::write(repo.path().join("file.txt"), "merged content").expect("write");
    run_git(&["add", "-A"], repo.path());

    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, RunstateStore::at_path(&store_path));
    let outcome = runner.execute(paused).await.expect("continue");
    assert_eq!(outcome, Outcome::Completed);
    assert!(!backend.has_merge_in_progress());
}

#[tokio::test]
async fn test_execute_abort_restores_branch_iteration_start() {
    let repo = init_repo();
    let backend = Backend::at(repo.path());
    let config = Config::new(repo.path());

    std::fs::write(repo.path().join("file.txt"), "main content").expect("write");
    run_git(&["add", "-A"], repo.path());
    run_git(&["commit", "-m", "main change", "--quiet"], repo.path());
    backend
        .create_branch(&BranchName::new("feature"), "main~1")
        .expect("create");
    backend
        .checkout(&BranchName::new("feature"))
        .expect("checkout");
    std::fs::write(repo.path().join("file.txt"), "feature content").expect("write");
    run_git(&["add", "-A"], repo.path());
    run_git(&["commit", "-m", "feature change", "--quiet"], repo.path());
    let pre_sync = backend.sha_of("feature").expect("sha");

    let store_dir = tempfile::tempdir().expect("tempdir");
    let store_path = store_dir.path().join("runstate.json");
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, RunstateStore::at_path(&store_path));
    let outcome = runner
        .execute(RunState::new(
            "sync",
            vec![
                Step::Merge {
                    branch: "main".to_string(),
                },
                Step::SkipCurrentBranch,
            ],
        ))
        .await
        .expect("execute");
    assert_eq!(outcome, Outcome::Paused);

    let paused = RunstateStore::at_path(&store_path)
        .load()
        .expect("load")
        .expect("present");
    let ctx = RunContext {
        backend: &backend,
        config: &config,
        connector: None,
    };
    let runner = Runner::new(ctx, RunstateStore::at_path(&store_path));
    let outcome = runner.execute(paused.for_abort()).await.expect("abort");
    assert_eq!(outcome, Outcome::Completed);

    assert!(!backend.has_merge_in_progress());
    assert_eq!(backend.sha_of("feature").expect("sha"), pre_sync);
    // abort consumed the runstate
    assert!(
        RunstateStore::at_path(&store_path)
            .load()
            .expect("load")
            .is_none()
    );
}
