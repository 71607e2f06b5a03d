// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for `sync` and the recovery protocol.

mod common;

use common::{Fixture, git, git_output};

use git_town_rs::cli::workflow::SyncArgs;
use git_town_rs::cmd::recovery::{run_abort_command, run_continue_command, run_skip_command};
use git_town_rs::cmd::sync::run_sync_command;
use git_town_rs::git::BranchName;
use git_town_rs::prompt::ScriptedPrompter;
use git_town_rs::runner::Outcome;

#[tokio::test]
async fn sync_with_remote_ahead_updates_main_and_merges_into_feature() {
    let fixture = Fixture::new().with_origin();

    // move origin/main one commit ahead of local main
    fixture.commit_file("upstream.txt", "upstream change");
    git(&["push", "--quiet"], fixture.repo.path());
    git(&["reset", "--hard", "--quiet", "HEAD~1"], fixture.repo.path());
    let origin_main = git_output(&["rev-parse", "origin/main"], fixture.repo.path());

    // feature branch with its own commit, tracked on origin
    fixture.create_feature_branch("feature", "main");
    git(
        &["push", "-u", "origin", "feature", "--quiet"],
        fixture.repo.path(),
    );

    let ws = fixture.workspace();
    let args = SyncArgs {
        all: false,
        dry_run: false,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let outcome = run_sync_command(&args, &ws, &mut prompter)
        .await
        .expect("sync");
    assert_eq!(outcome, Outcome::Completed);

    // main caught up with origin
    assert_eq!(
        git_output(&["rev-parse", "main"], fixture.repo.path()),
        origin_main
    );
    // the feature branch contains the upstream change
    assert!(
        fixture.repo.path().join("upstream.txt").exists(),
        "upstream change reached the feature branch"
    );
    // the merged feature branch was pushed
    assert_eq!(
        git_output(&["rev-parse", "feature"], fixture.repo.path()),
        git_output(&["rev-parse", "origin/feature"], fixture.repo.path())
    );
    // still on the feature branch, with main as `git checkout -` target
    assert_eq!(
        fixture.backend().current_branch().expect("current"),
        BranchName::new("feature")
    );
    assert_eq!(
        fixture.backend().previous_branch(),
        Some(BranchName::new("main"))
    );
}

#[tokio::test]
async fn sync_in_offline_mode_touches_no_remote() {
    let fixture = Fixture::new().with_origin();
    git(
        &["config", "git-town.offline", "true"],
        fixture.repo.path(),
    );

    // origin moves ahead; offline sync must not see it
    fixture.commit_file("upstream.txt", "upstream change");
    git(&["push", "--quiet"], fixture.repo.path());
    git(&["reset", "--hard", "--quiet", "HEAD~1"], fixture.repo.path());
    let stale_origin_main = git_output(&["rev-parse", "origin/main"], fixture.repo.path());
    let local_main = git_output(&["rev-parse", "main"], fixture.repo.path());

    fixture.create_feature_branch("feature", "main");

    let ws = fixture.workspace();
    let args = SyncArgs {
        all: false,
        dry_run: false,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    run_sync_command(&args, &ws, &mut prompter)
        .await
        .expect("sync");

    // local main unchanged, remote-tracking ref untouched, nothing pushed
    assert_eq!(
        git_output(&["rev-parse", "main"], fixture.repo.path()),
        local_main
    );
    assert_eq!(
        git_output(&["rev-parse", "origin/main"], fixture.repo.path()),
        stale_origin_main
    );
    assert!(
        !fixture
            .backend()
            .has_tracking_branch(&BranchName::new("feature"))
            .expect("tracking"),
        "offline sync must not create tracking branches"
    );
}

/// Arranges a sync that conflicts while merging main into the feature
/// branch, and leaves the run paused.
async fn paused_conflicting_sync(fixture: &Fixture) {
    fixture.create_feature_branch("feature", "main");
    // same file, diverging content on main
    fixture.checkout("main");
    fixture.commit_file("feature.txt", "conflicting main content");
    fixture.checkout("feature");

    let ws = fixture.workspace();
    let args = SyncArgs {
        all: false,
        dry_run: false,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let outcome = run_sync_command(&args, &ws, &mut prompter)
        .await
        .expect("sync pauses without a fatal error");
    assert_eq!(outcome, Outcome::Paused);
    assert!(fixture.backend().has_merge_in_progress());
    let state = ws.store().load().expect("load").expect("persisted");
    assert!(state.is_unfinished());
}

#[tokio::test]
async fn sync_conflict_then_continue_finishes_the_merge() {
    let fixture = Fixture::new();
    paused_conflicting_sync(&fixture).await;

    // unresolved conflicts block `continue`
    let ws = fixture.workspace();
    let blocked = run_continue_command(&ws).await;
    assert!(blocked.is_err(), "continue requires resolved conflicts");

    // resolve and continue
    std::fs::write(fixture.repo.path().join("feature.txt"), "merged content")
        .expect("write");
    git(&["add", "-A"], fixture.repo.path());
    let outcome = run_continue_command(&ws).await.expect("continue");
    assert_eq!(outcome, Outcome::Completed);

    assert!(!fixture.backend().has_merge_in_progress());
    assert_eq!(
        fixture.backend().current_branch().expect("current"),
        BranchName::new("feature")
    );
    // the merge commit is on the feature branch
    let merged = git_output(
        &["log", "--merges", "--format=%s", "feature"],
        fixture.repo.path(),
    );
    assert!(!merged.is_empty(), "expected a merge commit on feature");
}

#[tokio::test]
async fn sync_conflict_then_abort_restores_iteration_start() {
    let fixture = Fixture::new();
    let pre_sync = {
        fixture.create_feature_branch("feature", "main");
        fixture.checkout("main");
        fixture.commit_file("feature.txt", "conflicting main content");
        fixture.checkout("feature");
        git_output(&["rev-parse", "feature"], fixture.repo.path())
    };

    let ws = fixture.workspace();
    let args = SyncArgs {
        all: false,
        dry_run: false,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let outcome = run_sync_command(&args, &ws, &mut prompter)
        .await
        .expect("sync pauses");
    assert_eq!(outcome, Outcome::Paused);

    let outcome = run_abort_command(&ws).await.expect("abort");
    assert_eq!(outcome, Outcome::Completed);

    assert!(!fixture.backend().has_merge_in_progress());
    assert_eq!(
        git_output(&["rev-parse", "feature"], fixture.repo.path()),
        pre_sync,
        "feature is back at its pre-sync commit"
    );
    assert!(
        ws.store().load().expect("load").is_none(),
        "abort removes the runstate"
    );
}

#[tokio::test]
async fn sync_conflict_then_skip_moves_past_the_branch() {
    let fixture = Fixture::new();
    paused_conflicting_sync(&fixture).await;

    let ws = fixture.workspace();
    let outcome = run_skip_command(&ws).await.expect("skip");
    assert_eq!(outcome, Outcome::Completed);

    assert!(!fixture.backend().has_merge_in_progress());
    // skip finishes the command; the remaining steps put us back on feature
    assert_eq!(
        fixture.backend().current_branch().expect("current"),
        BranchName::new("feature")
    );
}

#[tokio::test]
async fn sync_dry_run_executes_nothing() {
    let fixture = Fixture::new();
    fixture.create_feature_branch("feature", "main");
    fixture.checkout("main");
    fixture.commit_file("main-only.txt", "main content");
    fixture.checkout("feature");
    let pre_sync = git_output(&["rev-parse", "feature"], fixture.repo.path());

    let ws = fixture.workspace();
    let args = SyncArgs {
        all: false,
        dry_run: true,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let outcome = run_sync_command(&args, &ws, &mut prompter)
        .await
        .expect("dry run");
    assert_eq!(outcome, Outcome::Completed);

    assert_eq!(
        git_output(&["rev-parse", "feature"], fixture.repo.path()),
        pre_sync,
        "dry run must not change anything"
    );
    assert!(ws.store().load().expect("load").is_none());
}
